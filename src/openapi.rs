//! OpenAPI document served at `/openapi.json`.

use crate::handlers::{auth, planets};
use crate::models::{LoginInput, Planet, PlanetInput, PlanetList, PlanetResponse, RegisterInput, ResetPasswordInput};
use crate::response::{MessageBody, TokenBody};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(title = "Planetary API", description = "Planets and users with bearer-token auth"),
    paths(
        planets::list,
        planets::read,
        planets::create,
        planets::update,
        planets::delete,
        auth::register,
        auth::login,
        auth::retrieve_password,
        auth::reset_password,
    ),
    components(schemas(
        Planet,
        PlanetInput,
        PlanetList,
        PlanetResponse,
        RegisterInput,
        LoginInput,
        ResetPasswordInput,
        MessageBody,
        TokenBody,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "planets", description = "Planet records"),
        (name = "auth", description = "Registration, login, password reset")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
