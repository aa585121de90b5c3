//! Note operations (note store)

use chrono::Utc;

use crate::error::DbError;
use crate::models::{NewNote, Note, NoteChanges};
use crate::repository::Database;
use crate::utils::new_id;

impl Database {
    // ==================== Note Operations ====================

    /// Insert a new note
    pub async fn insert_note(&self, note: NewNote) -> Result<Note, DbError> {
        let now = Utc::now();
        let id = new_id();

        sqlx::query(
            r#"
            INSERT INTO notes (id, user_id, title, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&note.user_id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(Note {
            id,
            title: note.title,
            content: note.content,
            user_id: note.user_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a note by ID
    pub async fn get_note_by_id(&self, id: &str) -> Result<Option<Note>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        result.map(|row| Note::try_from(&row).map_err(DbError::from)).transpose()
    }

    /// List the notes owned by a user, in creation order
    pub async fn list_notes_by_user(&self, user_id: &str) -> Result<Vec<Note>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE user_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| Note::try_from(row).map_err(DbError::from))
            .collect()
    }

    /// Apply title/content changes and return the updated note
    ///
    /// Returns `None` if no note with this ID exists.
    pub async fn update_note(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>, DbError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            UPDATE notes
            SET title = COALESCE(?, title),
                content = COALESCE(?, content),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(changes.title)
        .bind(changes.content)
        .bind(now.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_note_by_id(id).await
    }

    /// Delete a note
    pub async fn delete_note(&self, id: &str) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;

    async fn setup() -> (Database, String, String) {
        let db = Database::in_memory().await.unwrap();
        let mut ids = Vec::new();
        for email in ["a@x.com", "b@x.com"] {
            let user = db
                .insert_user(NewUser {
                    username: email.to_string(),
                    email: email.to_string(),
                    password_hash: "hash".to_string(),
                })
                .await
                .unwrap();
            ids.push(user.id);
        }
        let b = ids.pop().unwrap();
        let a = ids.pop().unwrap();
        (db, a, b)
    }

    fn new_note(user_id: &str, title: &str) -> NewNote {
        NewNote {
            user_id: user_id.to_string(),
            title: title.to_string(),
            content: "body".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_by_owner() {
        let (db, a, b) = setup().await;

        let first = db.insert_note(new_note(&a, "first")).await.unwrap();
        let second = db.insert_note(new_note(&a, "second")).await.unwrap();
        db.insert_note(new_note(&b, "other")).await.unwrap();

        let notes = db.list_notes_by_user(&a).await.unwrap();
        let ids: Vec<_> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);
        assert!(notes.iter().all(|n| n.user_id == a));

        let others = db.list_notes_by_user(&b).await.unwrap();
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].title, "other");
    }

    #[tokio::test]
    async fn test_partial_update_keeps_untouched_fields() {
        let (db, a, _) = setup().await;
        let note = db.insert_note(new_note(&a, "title")).await.unwrap();

        let updated = db
            .update_note(
                &note.id,
                NoteChanges {
                    title: Some("renamed".to_string()),
                    content: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.content, "body");
        assert_eq!(updated.user_id, a);
        assert!(updated.updated_at >= note.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_note() {
        let (db, _, _) = setup().await;
        let result = db.update_note("missing", NoteChanges::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_note() {
        let (db, a, _) = setup().await;
        let note = db.insert_note(new_note(&a, "gone")).await.unwrap();

        assert!(db.delete_note(&note.id).await.unwrap());
        assert!(db.get_note_by_id(&note.id).await.unwrap().is_none());
        assert!(!db.delete_note(&note.id).await.unwrap());
    }
}
