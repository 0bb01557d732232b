pub mod decode_jwt;
pub mod require_roles;
