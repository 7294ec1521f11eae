//! Admin account creation.

use anyhow::{Context, bail};
use sqlx::PgPool;

use cookbook_core::hash_password;
use cookbook_models::roles;

pub struct NewAdmin {
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

impl NewAdmin {
    /// Trims names and lowercases the email, the same way registration does.
    pub fn normalized(self) -> Self {
        Self {
            forename: self.forename.trim().to_string(),
            surname: self.surname.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: self.password,
        }
    }

    pub fn check(&self) -> anyhow::Result<()> {
        if self.forename.is_empty() || self.surname.is_empty() {
            bail!("Forename and surname are required");
        }
        if !self.email.contains('@') {
            bail!("'{}' is not a valid email address", self.email);
        }
        if self.password.len() < 8 {
            bail!("Password must be at least 8 characters");
        }
        Ok(())
    }
}

/// Inserts an account holding both the `admin` and `user` roles.
pub async fn create_admin(db: &PgPool, admin: NewAdmin) -> anyhow::Result<i64> {
    let admin = admin.normalized();
    admin.check()?;

    let hashed = hash_password(&admin.password).context("Failed to hash password")?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, forename, surname, password, roles)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(&admin.email)
    .bind(&admin.forename)
    .bind(&admin.surname)
    .bind(&hashed)
    .bind(vec![roles::ADMIN.to_string(), roles::USER.to_string()])
    .fetch_optional(db)
    .await
    .context("Failed to insert admin")?;

    match id {
        Some(id) => Ok(id),
        None => bail!("User with email {} already exists", admin.email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(email: &str, password: &str) -> NewAdmin {
        NewAdmin {
            forename: "  Ada ".into(),
            surname: "Lovelace".into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_normalized_trims_and_lowercases() {
        let admin = admin(" Ada@Example.COM ", "password123").normalized();
        assert_eq!(admin.forename, "Ada");
        assert_eq!(admin.email, "ada@example.com");
        assert!(admin.check().is_ok());
    }

    #[test]
    fn test_check_rejects_bad_input() {
        assert!(admin("not-an-email", "password123").normalized().check().is_err());
        assert!(admin("ada@example.com", "short").normalized().check().is_err());
    }
}
