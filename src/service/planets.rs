//! Planet persistence.

use crate::error::AppError;
use crate::models::{Planet, PlanetInput};
use sqlx::SqlitePool;

pub const PLANET_NOT_FOUND: &str = "That planet does not exist";
pub const PLANET_NAME_TAKEN: &str = "There is already a planet by that name";

const COLUMNS: &str = "id, planet_name, planet_type, home_star, mass, radius, distance";

pub struct PlanetService;

impl PlanetService {
    /// All planets, ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Planet>, AppError> {
        let sql = format!("SELECT {} FROM planets ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Planet>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one planet by id. Returns None if absent.
    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Planet>, AppError> {
        let sql = format!("SELECT {} FROM planets WHERE id = ?1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Planet>(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }

    /// Insert one planet. A duplicate name is a `Conflict`.
    pub async fn create(pool: &SqlitePool, input: &PlanetInput) -> Result<Planet, AppError> {
        let sql = format!(
            "INSERT INTO planets (planet_name, planet_type, home_star, mass, radius, distance) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, planet_name = %input.planet_name, "query");
        sqlx::query_as::<_, Planet>(&sql)
            .bind(input.planet_name.trim())
            .bind(input.planet_type.trim())
            .bind(input.home_star.trim())
            .bind(input.mass)
            .bind(input.radius)
            .bind(input.distance)
            .fetch_one(pool)
            .await
            .map_err(|e| AppError::from_insert(e, PLANET_NAME_TAKEN))
    }

    /// Overwrite every field of planet `id`. Absent id is `NotFound`; renaming onto a taken name is `Conflict`.
    pub async fn update(pool: &SqlitePool, id: i64, input: &PlanetInput) -> Result<Planet, AppError> {
        let sql = format!(
            "UPDATE planets SET planet_name = ?1, planet_type = ?2, home_star = ?3, \
             mass = ?4, radius = ?5, distance = ?6 WHERE id = ?7 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Planet>(&sql)
            .bind(input.planet_name.trim())
            .bind(input.planet_type.trim())
            .bind(input.home_star.trim())
            .bind(input.mass)
            .bind(input.radius)
            .bind(input.distance)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| AppError::from_insert(e, PLANET_NAME_TAKEN))?
            .ok_or_else(|| AppError::NotFound(PLANET_NOT_FOUND.into()))
    }

    /// Delete planet `id`. Absent id is `NotFound`.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "delete planet");
        let result = sqlx::query("DELETE FROM planets WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(PLANET_NOT_FOUND.into()));
        }
        Ok(())
    }
}
