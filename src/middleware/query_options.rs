use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query, Request},
    http::{Uri, request::Parts},
    middleware::Next,
    response::Response,
};

use cookbook_core::{ListQuery, QueryOptions};

/// Normalizes the list parameters of the query string into the request
/// extensions. Never rejects the request.
pub async fn attach_query_options(mut req: Request, next: Next) -> Response {
    let options = options_from_uri(req.uri());
    req.extensions_mut().insert(options);
    next.run(req).await
}

/// Repeated keys keep their first value.
pub fn options_from_uri(uri: &Uri) -> QueryOptions {
    let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map(|Query(pairs)| pairs)
        .unwrap_or_default();
    QueryOptions::from_query(&ListQuery::from_pairs(pairs))
}

/// The request's [`QueryOptions`]. Reads what [`attach_query_options`]
/// stored and falls back to parsing the URI itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions(pub QueryOptions);

impl<S> FromRequestParts<S> for ListOptions
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(options) = parts.extensions.get::<QueryOptions>() {
            return Ok(ListOptions(options.clone()));
        }
        Ok(ListOptions(options_from_uri(&parts.uri)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook_core::SortOrder;

    fn parse(uri: &str) -> QueryOptions {
        options_from_uri(&uri.parse::<Uri>().unwrap())
    }

    #[test]
    fn test_no_query_string() {
        assert_eq!(parse("/api/recipes"), QueryOptions::default());
    }

    #[test]
    fn test_full_query_string() {
        let options = parse(
            "/api/recipes?page=2&limit=5&sort_by=title&sort_direction=asc&filter_by=user_id&filter_values=1%2C2",
        );
        assert_eq!(options.offset, 5);
        assert_eq!(options.sort_order(), Some(SortOrder::Asc));
        assert_eq!(options.filter_value(), Some("1,2"));
    }

    #[test]
    fn test_unknown_parameters_are_ignored() {
        let options = parse("/api/recipes?foo=bar&limit=3");
        assert_eq!(options.limit, 3);
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let options = parse("/api/recipes?limit=1&limit=2&sort_by=title&sort_by=id");
        assert_eq!(options.limit, 1);
        assert_eq!(options.sort_by(), Some("title"));
    }
}
