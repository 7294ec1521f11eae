//! Access token payload.
//!
//! Tokens issued here carry `{ "user": { "id": n }, "iat": .., "exp": .. }`.
//! Older clients signed tokens with a flat `{ "id": n }`; both shapes are
//! accepted on the way in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub subject: TokenSubject,
    /// Expiry (Unix timestamp)
    pub exp: usize,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> i64 {
        self.subject.user_id()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenSubject {
    Nested { user: SubjectRef },
    Direct { id: i64 },
}

impl TokenSubject {
    pub fn nested(id: i64) -> Self {
        TokenSubject::Nested {
            user: SubjectRef { id },
        }
    }

    pub fn user_id(&self) -> i64 {
        match self {
            TokenSubject::Nested { user } => user.id,
            TokenSubject::Direct { id } => *id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_nested_shape() {
        let claims = Claims {
            subject: TokenSubject::nested(7),
            exp: 200,
            iat: 100,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "user": { "id": 7 }, "exp": 200, "iat": 100 })
        );
    }

    #[test]
    fn test_reads_nested_id() {
        let claims: Claims =
            serde_json::from_str(r#"{"user":{"id":12},"exp":200,"iat":100}"#).unwrap();
        assert_eq!(claims.user_id(), 12);
    }

    #[test]
    fn test_reads_flat_id() {
        let claims: Claims = serde_json::from_str(r#"{"id":34,"exp":200,"iat":100}"#).unwrap();
        assert_eq!(claims.user_id(), 34);
        assert_eq!(claims.subject, TokenSubject::Direct { id: 34 });
    }

    #[test]
    fn test_nested_wins_over_flat() {
        let claims: Claims =
            serde_json::from_str(r#"{"user":{"id":1},"id":2,"exp":200,"iat":100}"#).unwrap();
        assert_eq!(claims.user_id(), 1);
    }

    #[test]
    fn test_missing_subject_is_rejected() {
        assert!(serde_json::from_str::<Claims>(r#"{"exp":200,"iat":100}"#).is_err());
    }
}
