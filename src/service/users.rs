//! User persistence.

use crate::error::AppError;
use crate::models::User;
use sqlx::SqlitePool;

pub const EMAIL_TAKEN: &str = "That email already exists.";

/// Fields for a new row; `password_hash` must already be hashed.
pub struct NewUser<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

pub struct UserService;

impl UserService {
    /// Insert one user. A duplicate email (case-insensitive) is a `Conflict`.
    pub async fn create(pool: &SqlitePool, user: &NewUser<'_>) -> Result<User, AppError> {
        tracing::debug!(email = %user.email, "insert user");
        sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, email, password) VALUES (?1, ?2, ?3, ?4) \
             RETURNING id, first_name, last_name, email, password",
        )
        .bind(user.first_name.trim())
        .bind(user.last_name.trim())
        .bind(user.email.trim())
        .bind(user.password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::from_insert(e, EMAIL_TAKEN))
    }

    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password FROM users WHERE email = ?1",
        )
        .bind(email.trim())
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn update_password(pool: &SqlitePool, id: i64, password_hash: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET password = ?1 WHERE id = ?2")
            .bind(password_hash)
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::Db(sqlx::Error::RowNotFound));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::apply_migrations;
    use crate::store::connect;

    fn herschel() -> NewUser<'static> {
        NewUser {
            first_name: "William",
            last_name: "Herschel",
            email: "test@gmail.com",
            password_hash: "$argon2id$placeholder",
        }
    }

    #[tokio::test]
    async fn create_find_and_conflict() {
        let pool = connect("sqlite::memory:").await.unwrap();
        apply_migrations(&pool).await.unwrap();

        let created = UserService::create(&pool, &herschel()).await.unwrap();
        let found = UserService::find_by_email(&pool, "TEST@gmail.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(UserService::find_by_email(&pool, "nobody@x.io").await.unwrap().is_none());

        let err = UserService::create(&pool, &herschel()).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(m) if m == EMAIL_TAKEN));
    }

    #[tokio::test]
    async fn update_password_replaces_hash() {
        let pool = connect("sqlite::memory:").await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let created = UserService::create(&pool, &herschel()).await.unwrap();
        UserService::update_password(&pool, created.id, "$argon2id$new").await.unwrap();
        let found = UserService::find_by_email(&pool, "test@gmail.com").await.unwrap().unwrap();
        assert_eq!(found.password, "$argon2id$new");
        assert!(UserService::update_password(&pool, 999, "x").await.is_err());
    }
}
