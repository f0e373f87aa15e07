use diesel::Queryable;

/// An employee account. Notes only keep the `id`; the username is looked
/// up whenever notes are listed.
#[derive(Clone, Debug, Queryable)]
pub struct User {
    pub id: String,
    pub username: String,
    /// argon2 PHC string
    pub password: String,
    pub active: bool,
}
