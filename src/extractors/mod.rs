pub mod bearer;
pub mod body;

pub use bearer::AuthUser;
pub use body::JsonOrForm;
