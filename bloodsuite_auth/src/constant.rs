/// How long an issued access token stays valid.
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// bcrypt work factor for password hashes.
pub const PASSWORD_HASH_COST: u32 = 10;
