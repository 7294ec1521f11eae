use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use cookbook_core::AppError;
use cookbook_core::validation::describe;

/// JSON body that has passed its `validator` rules.
///
/// Both malformed bodies and rule failures become a 400 [`AppError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value
            .validate()
            .map_err(|errors| AppError::validation(describe(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::validation("Missing 'Content-Type: application/json' header");
    }

    let error_msg = rejection.body_text();

    if let Some(field) = error_msg
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
    {
        return AppError::validation(format!("{field} is required"));
    }

    if error_msg.contains("invalid type") {
        return AppError::validation("Invalid field type in request");
    }

    AppError::validation("Invalid request body")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    async fn extract(content_type: Option<&str>, body: &str) -> Result<Payload, AppError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body.to_string())).unwrap();
        ValidatedJson::<Payload>::from_request(req, &())
            .await
            .map(|ValidatedJson(p)| p)
    }

    #[tokio::test]
    async fn test_valid_body() {
        let payload = extract(Some("application/json"), r#"{"name":"Soup"}"#)
            .await
            .unwrap();
        assert_eq!(payload.name, "Soup");
    }

    #[tokio::test]
    async fn test_rule_failure_is_400() {
        let err = extract(Some("application/json"), r#"{"name":""}"#)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::validation("name: must not be empty"));
    }

    #[tokio::test]
    async fn test_missing_field() {
        let err = extract(Some("application/json"), "{}").await.unwrap_err();
        assert_eq!(err, AppError::validation("name is required"));
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let err = extract(None, r#"{"name":"Soup"}"#).await.unwrap_err();
        assert_eq!(
            err,
            AppError::validation("Missing 'Content-Type: application/json' header")
        );
    }

    #[tokio::test]
    async fn test_wrong_type() {
        let err = extract(Some("application/json"), r#"{"name":5}"#)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::validation("Invalid field type in request"));
    }
}
