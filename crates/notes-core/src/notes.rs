//! Note operations scoped to the authenticated owner

use notes_auth::AuthUser;
use notes_db::{Database, NewNote, Note, NoteChanges};
use tracing::{debug, info};

use crate::error::CoreError;

const NOTE_NOT_FOUND: &str = "Note not found";

/// Title and content as supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct NoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Note CRUD with ownership enforcement
#[derive(Clone)]
pub struct NoteService {
    db: Database,
}

impl NoteService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All notes owned by `user`
    pub async fn list(&self, user: &AuthUser) -> Result<Vec<Note>, CoreError> {
        Ok(self.db.list_notes_by_user(&user.id).await?)
    }

    /// Create a note owned by `user`
    pub async fn create(&self, user: &AuthUser, input: NoteInput) -> Result<Note, CoreError> {
        let (title, content) = match (input.title, input.content) {
            (Some(title), Some(content)) if !title.is_empty() => (title, content),
            _ => {
                return Err(CoreError::Validation(
                    "Title and content are required".to_string(),
                ));
            }
        };

        let note = self
            .db
            .insert_note(NewNote {
                user_id: user.id.clone(),
                title,
                content,
            })
            .await?;

        info!("User {} created note {}", user.id, note.id);
        Ok(note)
    }

    /// Update title and/or content of a note owned by `user`
    pub async fn update(
        &self,
        user: &AuthUser,
        id: &str,
        input: NoteInput,
    ) -> Result<Note, CoreError> {
        self.owned_note(user, id).await?;

        let changes = NoteChanges {
            title: input.title,
            content: input.content,
        };
        let note = self
            .db
            .update_note(id, changes)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOTE_NOT_FOUND.to_string()))?;

        debug!("User {} updated note {}", user.id, id);
        Ok(note)
    }

    /// Permanently delete a note owned by `user`
    pub async fn delete(&self, user: &AuthUser, id: &str) -> Result<(), CoreError> {
        self.owned_note(user, id).await?;

        if !self.db.delete_note(id).await? {
            return Err(CoreError::NotFound(NOTE_NOT_FOUND.to_string()));
        }

        info!("User {} deleted note {}", user.id, id);
        Ok(())
    }

    /// Fetch a note and check that `user` owns it
    async fn owned_note(&self, user: &AuthUser, id: &str) -> Result<Note, CoreError> {
        let note = self
            .db
            .get_note_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOTE_NOT_FOUND.to_string()))?;

        if note.user_id != user.id {
            debug!("User {} denied access to note {}", user.id, id);
            return Err(CoreError::NotAuthorized);
        }

        Ok(note)
    }
}
