pub mod auth;
pub mod planets;
pub mod seed;
pub mod users;
pub mod validation;

pub use auth::AuthService;
pub use planets::PlanetService;
pub use users::UserService;
pub use validation::RequestValidator;
