diesel::table! {
    notes (id) {
        id -> Varchar,
        user_id -> Varchar,
        title -> Varchar,
        text -> Text,
        completed -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    users (id) {
        id -> Varchar,
        username -> Varchar,
        password -> Varchar,
        active -> Bool,
    }
}
