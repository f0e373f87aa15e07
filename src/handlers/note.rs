pub mod mutate;
pub mod query;

const DUPLICATE_TITLE: &str = "Duplicate note title";
const NOTE_NOT_FOUND: &str = "Note not found";
