pub mod constant;
pub mod error;
pub mod headers;
pub mod password;
pub mod token;

pub type Result<T, E = error::AuthError> = std::result::Result<T, E>;
