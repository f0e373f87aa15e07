use super::{
    api::{ApiClient, NewNoteRequest},
    error::ApiError,
    state::ClientState,
    transport::Transport,
};

/// Where a form sends the user after a successful submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Dash,
    NotesList,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dash => "/dash",
            Route::NotesList => "/dash/notes",
        }
    }
}

/// User-facing text for a failed submit. `missing_fields` is what a 400
/// reads as on this particular form.
pub fn failure_message(err: &ApiError, missing_fields: &str) -> String {
    match err.status {
        None => "No Server Response".to_owned(),
        Some(400) => missing_fields.to_owned(),
        Some(401) => "Unauthorized".to_owned(),
        Some(_) => err.message.clone(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    username: String,
    password: String,
    err_msg: String,
}

impl LoginForm {
    pub fn new() -> Self {
        LoginForm::default()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
        self.err_msg.clear();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.err_msg.clear();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn err_msg(&self) -> &str {
        &self.err_msg
    }

    pub async fn submit<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
        state: &mut ClientState,
    ) -> Option<Route> {
        match api.login(state, &self.username, &self.password).await {
            Ok(_) => {
                self.username.clear();
                self.password.clear();
                Some(Route::Dash)
            }
            Err(err) => {
                log::debug!("login failed: {err}");
                self.err_msg = failure_message(&err, "Missing Username or Password");
                None
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserOption {
    pub id: String,
    pub username: String,
}

#[derive(Clone, Debug)]
pub struct NewNoteForm {
    users: Vec<UserOption>,
    title: String,
    text: String,
    user_id: String,
    err_msg: String,
}

impl NewNoteForm {
    /// The note is assigned to the first offered user until changed.
    pub fn new(users: Vec<UserOption>) -> Self {
        let user_id = users.first().map(|u| u.id.clone()).unwrap_or_default();
        NewNoteForm {
            users,
            title: String::new(),
            text: String::new(),
            user_id,
            err_msg: String::new(),
        }
    }

    pub fn users(&self) -> &[UserOption] {
        &self.users
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user_id = user_id.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn err_msg(&self) -> &str {
        &self.err_msg
    }

    pub fn can_save(&self) -> bool {
        [&self.title, &self.text, &self.user_id]
            .iter()
            .all(|field| !field.is_empty())
    }

    /// Does nothing unless `can_save`.
    pub async fn submit<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
        state: &mut ClientState,
    ) -> Option<Route> {
        if !self.can_save() {
            return None;
        }

        let note = NewNoteRequest {
            user: self.user_id.clone(),
            title: self.title.clone(),
            text: self.text.clone(),
        };
        match api.add_new_note(state, &note).await {
            Ok(_) => {
                self.title.clear();
                self.text.clear();
                self.user_id.clear();
                self.err_msg.clear();
                Some(Route::NotesList)
            }
            Err(err) => {
                self.err_msg = failure_message(&err, "Missing fields");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{
        test_support::ScriptedTransport,
        transport::{ApiResponse, TransportError},
    };
    use serde_json::json;

    fn users() -> Vec<UserOption> {
        vec![
            UserOption {
                id: "u1".to_owned(),
                username: "dan".to_owned(),
            },
            UserOption {
                id: "u2".to_owned(),
                username: "eve".to_owned(),
            },
        ]
    }

    async fn failed_login(outcome: Result<ApiResponse, TransportError>) -> String {
        let api = ApiClient::new(ScriptedTransport::new(vec![outcome]));
        let mut state = ClientState::default();
        let mut form = LoginForm::new();
        form.set_username("dan");
        form.set_password("pw");

        assert_eq!(form.submit(&api, &mut state).await, None);
        assert_eq!(state.auth.token(), None);
        form.err_msg().to_owned()
    }

    #[actix_web::test]
    async fn login_failures_read_as_canned_messages() {
        assert_eq!(
            failed_login(Err(TransportError("refused".to_owned()))).await,
            "No Server Response"
        );
        assert_eq!(
            failed_login(Ok(ApiResponse {
                status: 400,
                body: json!({"message": "All fields are required"}),
            }))
            .await,
            "Missing Username or Password"
        );
        assert_eq!(
            failed_login(Ok(ApiResponse {
                status: 401,
                body: json!({"message": "Unauthorized"}),
            }))
            .await,
            "Unauthorized"
        );
        assert_eq!(
            failed_login(Ok(ApiResponse {
                status: 429,
                body: json!({"message": "Too many requests"}),
            }))
            .await,
            "Too many requests"
        );
    }

    #[actix_web::test]
    async fn login_success_keeps_token_and_goes_to_dash() {
        let api = ApiClient::new(ScriptedTransport::new(vec![Ok(ApiResponse {
            status: 200,
            body: json!({ "accessToken": "t0k3n" }),
        })]));
        let mut state = ClientState::default();
        let mut form = LoginForm::new();
        form.set_username("dan");
        form.set_password("pw");

        let route = form.submit(&api, &mut state).await;

        assert_eq!(route.map(Route::path), Some("/dash"));
        assert_eq!(state.auth.token(), Some("t0k3n"));
        assert_eq!(form.username(), "");
    }

    #[actix_web::test]
    async fn editing_clears_the_login_error() {
        let api = ApiClient::new(ScriptedTransport::new(vec![]));
        let mut state = ClientState::default();
        let mut form = LoginForm::new();

        form.submit(&api, &mut state).await;
        assert_eq!(form.err_msg(), "No Server Response");

        form.set_username("d");
        assert_eq!(form.err_msg(), "");
    }

    #[test]
    fn new_note_form_defaults_to_first_user() {
        let mut form = NewNoteForm::new(users());
        assert_eq!(form.user_id(), "u1");
        assert!(!form.can_save());

        form.set_title("T");
        form.set_text("hi");
        assert!(form.can_save());

        form.set_user_id("");
        assert!(!form.can_save());
    }

    #[actix_web::test]
    async fn incomplete_new_note_is_not_sent() {
        let api = ApiClient::new(ScriptedTransport::new(vec![]));
        let mut state = ClientState::default();
        let mut form = NewNoteForm::new(users());
        form.set_title("T");

        assert_eq!(form.submit(&api, &mut state).await, None);
        assert_eq!(api_requests(&api), 0);
    }

    #[actix_web::test]
    async fn saved_note_clears_form_and_goes_to_list() {
        let api = ApiClient::new(ScriptedTransport::new(vec![Ok(ApiResponse {
            status: 201,
            body: json!({ "message": "New note T created" }),
        })]));
        let mut state = ClientState::default();
        let mut form = NewNoteForm::new(users());
        form.set_title("T");
        form.set_text("hi");
        form.set_user_id("u2");

        let route = form.submit(&api, &mut state).await;

        assert_eq!(route, Some(Route::NotesList));
        assert_eq!((form.title(), form.text(), form.user_id()), ("", "", ""));
    }

    #[actix_web::test]
    async fn duplicate_title_surfaces_server_message() {
        let api = ApiClient::new(ScriptedTransport::new(vec![Ok(ApiResponse {
            status: 409,
            body: json!({ "message": "Duplicate note title", "code": "duplicate" }),
        })]));
        let mut state = ClientState::default();
        let mut form = NewNoteForm::new(users());
        form.set_title("T");
        form.set_text("hi");

        assert_eq!(form.submit(&api, &mut state).await, None);
        assert_eq!(form.err_msg(), "Duplicate note title");
        assert_eq!(form.title(), "T");
    }

    fn api_requests(api: &ApiClient<ScriptedTransport>) -> usize {
        api.transport().requests().len()
    }
}
