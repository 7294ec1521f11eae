//! User accounts.

use chrono::{DateTime, Utc};
use cookbook_core::Listing;
use cookbook_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const USER: &str = "user";
}

/// A user as returned by the API. The password hash is never part of it.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub forename: String,
    pub surname: String,
    #[schema(example = json!(["user"]))]
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub const COLUMNS: &'static str =
        "id, email, forename, surname, roles, created_at, updated_at";

    pub const LISTING: Listing = Listing {
        table: "users",
        columns: Self::COLUMNS,
        sortable: &["id", "email", "forename", "surname", "created_at", "updated_at"],
        filterable: &["id", "email", "forename", "surname"],
        default_sort: "created_at",
    };

    /// Case-insensitive check against each of the user's roles.
    pub fn has_any_role<S: AsRef<str>>(&self, allowed: &[S]) -> bool {
        self.roles.iter().any(|role| {
            allowed
                .iter()
                .any(|wanted| role.eq_ignore_ascii_case(wanted.as_ref()))
        })
    }
}

/// Only used while checking a login.
#[derive(FromRow, Debug, Clone)]
pub struct UserWithPassword {
    #[sqlx(flatten)]
    pub user: User,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub forename: Option<String>,
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub surname: Option<String>,
    #[validate(length(min = 1, message = "must contain at least one role"))]
    pub roles: Option<Vec<String>>,
}

impl UpdateUserDto {
    pub fn has_changes(&self) -> bool {
        self.email.is_some()
            || self.forename.is_some()
            || self.surname.is_some()
            || self.roles.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[&str]) -> User {
        User {
            id: 1,
            email: "ada@example.com".into(),
            forename: "Ada".into(),
            surname: "Lovelace".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_has_any_role_is_case_insensitive() {
        let user = user(&["User", "ADMIN"]);
        assert!(user.has_any_role(&["admin"]));
        assert!(user.has_any_role(&["user"]));
        assert!(!user.has_any_role(&["editor"]));
        assert!(!user.has_any_role::<&str>(&[]));
    }

    #[test]
    fn test_no_roles_matches_nothing() {
        assert!(!user(&[]).has_any_role(&["user"]));
    }

    #[test]
    fn test_user_never_serializes_password() {
        let json = serde_json::to_value(user(&["user"])).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["roles"], serde_json::json!(["user"]));
    }

    #[test]
    fn test_update_user_dto() {
        assert!(!UpdateUserDto::default().has_changes());

        let dto = UpdateUserDto {
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert!(dto.has_changes());
        assert!(dto.validate().is_err());

        let dto = UpdateUserDto {
            roles: Some(vec![]),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = UpdateUserDto {
            forename: Some("Grace".into()),
            roles: Some(vec!["admin".into()]),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
