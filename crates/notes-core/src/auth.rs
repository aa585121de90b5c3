//! Registration and login

use notes_auth::{JwtManager, hash_password, verify_password};
use notes_db::{Database, DbError, NewUser};
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::CoreError;

/// Valid Argon2id hash of a throwaway password, verified when the email is
/// unknown so that both login failure paths do the same work.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dGltaW5nX2F0dGFja19wcmV2ZW50aW9u$K8rI5T7VdQ8xkO0GqK5K2w";

const USER_EXISTS: &str = "User already exists";

/// Orchestrates the credential store, password hasher and token issuer
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    jwt: Arc<JwtManager>,
}

impl AuthService {
    pub fn new(db: Database, jwt: Arc<JwtManager>) -> Self {
        Self { db, jwt }
    }

    /// Register a new account and return a token for it
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, CoreError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(CoreError::Validation("All fields are required".to_string()));
        }

        if self.db.get_user_by_email(email).await?.is_some() {
            debug!("Registration rejected, email already in use");
            return Err(CoreError::Conflict(USER_EXISTS.to_string()));
        }

        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

        let user = self
            .db
            .insert_user(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .map_err(conflict_on_duplicate)?;

        info!("Registered user {}", user.id);

        Ok(self.jwt.generate_token(&user.id)?)
    }

    /// Check credentials and return a token for the matching account
    pub async fn login(&self, email: &str, password: &str) -> Result<String, CoreError> {
        if email.is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let user = self.db.get_user_by_email(email).await?;

        let hash_to_verify = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(|| DUMMY_HASH.to_string());
        let password = password.to_string();
        let password_valid =
            tokio::task::spawn_blocking(move || verify_password(&password, &hash_to_verify))
                .await?;

        let user = match (user, password_valid) {
            (Some(u), true) => u,
            _ => {
                debug!("Login rejected");
                return Err(CoreError::InvalidCredentials);
            }
        };

        info!("User {} logged in", user.id);

        Ok(self.jwt.generate_token(&user.id)?)
    }
}

/// A duplicate email found at insert time (a registration race) is the
/// same conflict the pre-check reports
fn conflict_on_duplicate(err: DbError) -> CoreError {
    match err {
        DbError::Duplicate(_) => CoreError::Conflict(USER_EXISTS.to_string()),
        other => CoreError::Database(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    async fn service() -> (AuthService, Database, Arc<JwtManager>) {
        let db = Database::in_memory().await.unwrap();
        let jwt = Arc::new(JwtManager::new("core-secret", Duration::hours(1)));
        (AuthService::new(db.clone(), jwt.clone()), db, jwt)
    }

    #[tokio::test]
    async fn test_register_persists_hashed_user() {
        let (auth, db, jwt) = service().await;

        let token = auth.register("a", "a@x.com", "p1").await.unwrap();
        let claims = jwt.validate_token(&token).unwrap();

        let user = db.get_user_by_id(&claims.user.id).await.unwrap().unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.username, "a");
        assert_ne!(user.password_hash, "p1");
        assert!(verify_password("p1", &user.password_hash));
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        let (auth, db, _) = service().await;

        for (username, email, password) in [("", "a@x.com", "p"), ("a", "", "p"), ("a", "a@x.com", "")] {
            let err = auth.register(username, email, password).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
        }
        assert_eq!(db.count_users().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_without_new_record() {
        let (auth, db, _) = service().await;

        auth.register("a", "a@x.com", "p1").await.unwrap();
        let err = auth.register("someone-else", "a@x.com", "other").await.unwrap_err();

        assert!(matches!(err, CoreError::Conflict(ref msg) if msg == "User already exists"));
        assert_eq!(db.count_users().await.unwrap(), 1);
    }

    #[test]
    fn test_insert_duplicate_maps_to_conflict() {
        let err = conflict_on_duplicate(DbError::Duplicate("User 'a@x.com' already exists".into()));
        assert!(matches!(err, CoreError::Conflict(ref msg) if msg == "User already exists"));

        let err = conflict_on_duplicate(DbError::Connection(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, CoreError::Database(_)));
    }

    #[tokio::test]
    async fn test_concurrent_registrations_yield_one_account() {
        let (auth, db, _) = service().await;

        let (first, second) = tokio::join!(
            auth.register("a", "race@x.com", "p1"),
            auth.register("b", "race@x.com", "p2"),
        );

        let outcomes = [first, second];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(outcomes.iter().any(
            |r| matches!(r, Err(CoreError::Conflict(msg)) if msg == "User already exists")
        ));
        assert_eq!(db.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_login_returns_token_for_same_user() {
        let (auth, _, jwt) = service().await;

        let registered = auth.register("a", "a@x.com", "p1").await.unwrap();
        let logged_in = auth.login("a@x.com", "p1").await.unwrap();

        let first = jwt.validate_token(&registered).unwrap();
        let second = jwt.validate_token(&logged_in).unwrap();
        assert_eq!(first.user.id, second.user.id);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (auth, _, _) = service().await;
        auth.register("a", "a@x.com", "p1").await.unwrap();

        let wrong_password = auth.login("a@x.com", "wrong").await.unwrap_err();
        let unknown_email = auth.login("b@x.com", "p1").await.unwrap_err();

        assert!(matches!(wrong_password, CoreError::InvalidCredentials));
        assert!(matches!(unknown_email, CoreError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_requires_fields() {
        let (auth, _, _) = service().await;
        let err = auth.login("", "p1").await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg == "Email and password are required"));
    }
}
