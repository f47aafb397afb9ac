//! Planet record, request body, and response envelopes.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Planet {
    pub id: i64,
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

/// Writable planet fields. Body of create and update; an `id` field, if sent, is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetInput {
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub mass: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub radius: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub distance: f64,
}

impl PlanetInput {
    pub fn new(
        planet_name: &str,
        planet_type: &str,
        home_star: &str,
        mass: f64,
        radius: f64,
        distance: f64,
    ) -> Self {
        PlanetInput {
            planet_name: planet_name.to_string(),
            planet_type: planet_type.to_string(),
            home_star: home_star.to_string(),
            mass,
            radius,
            distance,
        }
    }
}

/// `{data: [...]}` returned by the list route.
#[derive(Serialize, ToSchema)]
pub struct PlanetList {
    pub data: Vec<Planet>,
}

/// `{message, data}` returned by the single fetch; `data` is `null` when the planet is missing.
#[derive(Serialize, ToSchema)]
pub struct PlanetResponse {
    pub message: String,
    pub data: Option<Planet>,
}

/// Accepts a JSON number or a numeric string (form bodies carry every value as text).
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumberVisitor;

    impl<'de> de::Visitor<'de> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("'{}' is not a number", v)))
        }
    }

    deserializer.deserialize_any(NumberVisitor)
}
