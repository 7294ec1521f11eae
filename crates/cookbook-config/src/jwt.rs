use std::env;

use crate::parsed_or;

pub const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup("JWT_SECRET")
                .unwrap_or_else(|| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: parsed_or(
                &lookup,
                "JWT_ACCESS_EXPIRY",
                DEFAULT_ACCESS_EXPIRY_SECS,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = JwtConfig::from_lookup(|_| None);
        assert_eq!(config.access_token_expiry, 3600);
        assert!(!config.secret.is_empty());
    }

    #[test]
    fn test_reads_values() {
        let config = JwtConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("s3cret".into()),
            "JWT_ACCESS_EXPIRY" => Some("900".into()),
            _ => None,
        });
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.access_token_expiry, 900);
    }

    #[test]
    fn test_unparseable_expiry_uses_default() {
        let config = JwtConfig::from_lookup(|key| {
            (key == "JWT_ACCESS_EXPIRY").then(|| "an hour".to_string())
        });
        assert_eq!(config.access_token_expiry, DEFAULT_ACCESS_EXPIRY_SECS);
    }
}
