use diesel::{pg::PgConnection, prelude::*, r2d2::ConnectionManager};
use std::time::SystemTime;

use super::{new_note_id, Store};
use crate::{
    errors::ServerError,
    models::{
        note::{NewNote, Note, NoteChanges},
        user::User,
    },
    schema::{notes, users},
};

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub fn build_pool(database_url: &str) -> Result<Pool, ServerError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(r2d2::Pool::builder().build(manager)?)
}

pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    pub fn new(pool: Pool) -> Self {
        PgStore { pool }
    }
}

impl Store for PgStore {
    fn all_notes(&self) -> Result<Vec<Note>, ServerError> {
        let mut connection = self.pool.get()?;
        Ok(notes::table
            .order(notes::created_at.asc())
            .load::<Note>(&mut connection)?)
    }

    fn find_note(&self, id: &str) -> Result<Option<Note>, ServerError> {
        let mut connection = self.pool.get()?;
        Ok(notes::table
            .find(id)
            .first::<Note>(&mut connection)
            .optional()?)
    }

    fn find_note_by_title(&self, title: &str) -> Result<Option<Note>, ServerError> {
        let mut connection = self.pool.get()?;
        Ok(notes::table
            .filter(notes::title.eq(title))
            .first::<Note>(&mut connection)
            .optional()?)
    }

    fn insert_note(&self, note: NewNote) -> Result<Note, ServerError> {
        let mut connection = self.pool.get()?;
        let time_now = SystemTime::now();

        Ok(diesel::insert_into(notes::table)
            .values((
                notes::id.eq(new_note_id()),
                notes::user_id.eq(note.user_id),
                notes::title.eq(note.title),
                notes::text.eq(note.text),
                notes::completed.eq(false),
                notes::created_at.eq(time_now),
                notes::updated_at.eq(time_now),
            ))
            .get_result::<Note>(&mut connection)?)
    }

    fn update_note(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>, ServerError> {
        let mut connection = self.pool.get()?;

        Ok(diesel::update(notes::table.find(id))
            .set((
                notes::user_id.eq(changes.user_id),
                notes::title.eq(changes.title),
                notes::text.eq(changes.text),
                notes::completed.eq(changes.completed),
                notes::updated_at.eq(SystemTime::now()),
            ))
            .get_result::<Note>(&mut connection)
            .optional()?)
    }

    fn delete_note(&self, id: &str) -> Result<Option<Note>, ServerError> {
        let mut connection = self.pool.get()?;
        Ok(diesel::delete(notes::table.find(id))
            .get_result::<Note>(&mut connection)
            .optional()?)
    }

    fn find_user(&self, id: &str) -> Result<Option<User>, ServerError> {
        let mut connection = self.pool.get()?;
        Ok(users::table
            .find(id)
            .first::<User>(&mut connection)
            .optional()?)
    }

    fn find_user_by_username(&self, username: &str) -> Result<Option<User>, ServerError> {
        let mut connection = self.pool.get()?;
        Ok(users::table
            .filter(users::username.eq(username))
            .first::<User>(&mut connection)
            .optional()?)
    }
}
