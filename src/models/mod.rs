pub mod planet;
pub mod user;

pub use planet::*;
pub use user::*;
