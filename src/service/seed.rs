//! Demonstration data: three planets and one user with a known password.

use crate::auth::hash_password;
use crate::error::AppError;
use crate::models::PlanetInput;
use crate::service::planets::PlanetService;
use crate::service::users::{NewUser, UserService};
use sqlx::SqlitePool;

pub const SEED_USER_EMAIL: &str = "test@gmail.com";
pub const SEED_USER_PASSWORD: &str = "P@ssw0rd";

/// Rows inserted by one seeding run; rows already present are skipped.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub planets_inserted: usize,
    pub users_inserted: usize,
}

pub fn seed_planets() -> Vec<PlanetInput> {
    vec![
        PlanetInput::new("Mercury", "Class D", "Sol", 3.258e23, 1516.0, 35.98e6),
        PlanetInput::new("Venus", "Class K", "Sol", 4.867e24, 3760.0, 67.24e6),
        PlanetInput::new("Earth", "Class M", "Sol", 5.972e24, 3959.0, 92.96e6),
    ]
}

/// Insert the seed rows. Safe to run repeatedly.
pub async fn seed(pool: &SqlitePool) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    for planet in seed_planets() {
        match PlanetService::create(pool, &planet).await {
            Ok(_) => report.planets_inserted += 1,
            Err(AppError::Conflict(_)) => {
                tracing::info!(planet_name = %planet.planet_name, "seed planet exists, skipping");
            }
            Err(e) => return Err(e),
        }
    }

    let password_hash = hash_password(SEED_USER_PASSWORD)?;
    let user = NewUser {
        first_name: "William",
        last_name: "Herschel",
        email: SEED_USER_EMAIL,
        password_hash: &password_hash,
    };
    match UserService::create(pool, &user).await {
        Ok(_) => report.users_inserted += 1,
        Err(AppError::Conflict(_)) => {
            tracing::info!(email = SEED_USER_EMAIL, "seed user exists, skipping");
        }
        Err(e) => return Err(e),
    }

    tracing::info!(
        planets = report.planets_inserted,
        users = report.users_inserted,
        "database seeded"
    );
    Ok(report)
}
