//! Query option normalization for list endpoints.
//!
//! Every list endpoint accepts the same six query parameters:
//!
//! | parameter        | meaning                                        |
//! |------------------|------------------------------------------------|
//! | `page`           | 1-indexed page number (default 1)              |
//! | `limit`          | page size (default 10, max 100)                |
//! | `sort_by`        | column to order by                             |
//! | `sort_direction` | `asc` or `desc` (default `desc`)               |
//! | `filter_by`      | column to filter on                            |
//! | `filter_values`  | comma separated values the column must match   |
//!
//! The raw strings are turned into a bounded [`QueryOptions`] before any
//! query runs. Normalization never fails: bad numbers fall back to their
//! defaults and incomplete sort/filter pairs are dropped.
//!
//! # Bounds
//!
//! - `limit < 1` resets to the default of 10 (it is *not* clamped to 1)
//! - `limit > 100` clamps to 100
//! - `page < 1` resets to 1
//! - `offset` is always `(page - 1) * limit`
//!
//! # Example
//!
//! ```ignore
//! use cookbook_core::pagination::{ListQuery, QueryOptions};
//!
//! // GET /api/recipes?page=3&limit=20&sort_by=title
//! let query = ListQuery {
//!     page: Some("3".into()),
//!     limit: Some("20".into()),
//!     sort_by: Some("title".into()),
//!     ..Default::default()
//! };
//!
//! let options = QueryOptions::from_query(&query);
//! assert_eq!(options.offset, 40);
//! assert_eq!(options.sort_order(), Some(SortOrder::Desc));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Raw, untrusted list parameters exactly as they arrive in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page number, 1-indexed (default: 1)
    pub page: Option<String>,
    /// Items per page, 1-100 (default: 10)
    pub limit: Option<String>,
    /// Column to sort by
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default: `desc`)
    pub sort_direction: Option<String>,
    /// Column to filter on
    pub filter_by: Option<String>,
    /// Comma separated values `filter_by` must match
    pub filter_values: Option<String>,
}

impl ListQuery {
    /// Builds the raw parameters from decoded query pairs. When a key is
    /// repeated the first occurrence wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                "sort_by" => &mut query.sort_by,
                "sort_direction" => &mut query.sort_direction,
                "filter_by" => &mut query.filter_by,
                "filter_values" => &mut query.filter_values,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Reads a direction case-insensitively; anything but `asc` is `desc`.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub by: String,
    pub order: SortOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub by: String,
    pub value: String,
}

impl Filter {
    /// The individual values of a comma separated `filter_values`.
    pub fn values(&self) -> Vec<String> {
        self.value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Normalized pagination, sort and filter options for one request.
///
/// A sort order only exists together with a sort column, and a filter value
/// only together with a filter column; both pairs are modelled as a single
/// optional value so the invariants hold by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
    pub sort: Option<Sort>,
    pub filter: Option<Filter>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::from_query(&ListQuery::default())
    }
}

impl QueryOptions {
    pub fn from_query(query: &ListQuery) -> Self {
        let mut limit = parse_int(query.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);
        if limit < 1 {
            limit = DEFAULT_LIMIT;
        }
        if limit > MAX_LIMIT {
            limit = MAX_LIMIT;
        }

        let page = parse_int(query.page.as_deref())
            .filter(|page| *page >= 1)
            .unwrap_or(DEFAULT_PAGE);

        let offset = (page - 1).saturating_mul(limit);

        let sort = non_empty(query.sort_by.as_deref()).map(|by| Sort {
            by: by.to_string(),
            order: non_empty(query.sort_direction.as_deref())
                .map(SortOrder::parse)
                .unwrap_or(SortOrder::Desc),
        });

        let filter = match (
            non_empty(query.filter_by.as_deref()),
            non_empty(query.filter_values.as_deref()),
        ) {
            (Some(by), Some(value)) => Some(Filter {
                by: by.to_string(),
                value: value.to_string(),
            }),
            _ => None,
        };

        Self {
            page,
            limit,
            offset,
            sort,
            filter,
        }
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort.as_ref().map(|s| s.by.as_str())
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort.as_ref().map(|s| s.order)
    }

    pub fn filter_by(&self) -> Option<&str> {
        self.filter.as_ref().map(|f| f.by.as_str())
    }

    pub fn filter_value(&self) -> Option<&str> {
        self.filter.as_ref().map(|f| f.value.as_str())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlatQueryOptions<'a> {
    page: i64,
    limit: i64,
    offset: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_value: Option<&'a str>,
}

impl Serialize for QueryOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        FlatQueryOptions {
            page: self.page,
            limit: self.limit,
            offset: self.offset,
            sort_by: self.sort_by(),
            sort_order: self.sort_order(),
            filter_by: self.filter_by(),
            filter_value: self.filter_value(),
        }
        .serialize(serializer)
    }
}

/// Integer parsing with `parseInt` leniency.
///
/// Leading whitespace and a sign are accepted and parsing stops at the first
/// non-digit, so `"12abc"` is 12. Input without leading digits and a result
/// of zero both yield `None`, which callers treat as "use the default".
fn parse_int(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    let value = if negative { -value } else { value };

    (value != 0).then_some(value)
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// Metadata about a paginated response.
///
/// ```json
/// {
///   "data": [...],
///   "meta": { "total": 42, "page": 2, "limit": 10, "offset": 10, "has_more": true }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// Total number of matching rows across all pages
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
    /// Whether rows exist beyond this page
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn new(total: i64, options: &QueryOptions) -> Self {
        Self {
            total,
            page: options.page,
            limit: options.limit,
            offset: options.offset,
            has_more: options.offset.saturating_add(options.limit) < total,
        }
    }
}

/// A page of rows plus its [`PaginationMeta`].
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ListQuery {
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let options = QueryOptions::default();
        assert_eq!(options.page, 1);
        assert_eq!(options.limit, 10);
        assert_eq!(options.offset, 0);
        assert!(options.sort.is_none());
        assert!(options.filter.is_none());
    }

    #[test]
    fn test_from_pairs_keeps_first_value() {
        let query = ListQuery::from_pairs([
            ("limit", "1"),
            ("sort_by", "title"),
            ("limit", "2"),
            ("sort_by", "id"),
            ("colour", "red"),
        ]);
        assert_eq!(query.limit.as_deref(), Some("1"));
        assert_eq!(query.sort_by.as_deref(), Some("title"));
        assert!(query.page.is_none());

        let options = QueryOptions::from_query(&query);
        assert_eq!(options.limit, 1);
        assert_eq!(options.sort_by(), Some("title"));
    }

    #[test]
    fn test_page_and_limit() {
        let options = QueryOptions::from_query(&query(&[("page", "1"), ("limit", "2")]));
        assert_eq!(options.page, 1);
        assert_eq!(options.limit, 2);
        assert_eq!(options.offset, 0);
    }

    #[test]
    fn test_negative_limit_reverts_to_default() {
        let options = QueryOptions::from_query(&query(&[("limit", "-2")]));
        assert_eq!(options.limit, 10);
    }

    #[test]
    fn test_large_limit_clamps_to_max() {
        let options = QueryOptions::from_query(&query(&[("limit", "250")]));
        assert_eq!(options.limit, 100);
    }

    #[test]
    fn test_limit_boundary_cases() {
        let cases = [
            ("1", 1),
            ("50", 50),
            ("100", 100),
            ("101", 100),
            ("0", 10),
            ("-1", 10),
            ("abc", 10),
            ("", 10),
            ("12abc", 12),
            ("  7", 7),
            ("3.9", 3),
        ];

        for (input, expected) in cases {
            let options = QueryOptions::from_query(&query(&[("limit", input)]));
            assert_eq!(options.limit, expected, "limit={input:?}");
        }
    }

    #[test]
    fn test_page_boundary_cases() {
        let cases = [("1", 1), ("7", 7), ("0", 1), ("-4", 1), ("nope", 1)];

        for (input, expected) in cases {
            let options = QueryOptions::from_query(&query(&[("page", input)]));
            assert_eq!(options.page, expected, "page={input:?}");
        }
    }

    #[test]
    fn test_offset_follows_page_and_limit() {
        for (page, limit) in [(1, 10), (2, 10), (3, 25), (10, 100), (4, 1)] {
            let options = QueryOptions::from_query(&query(&[
                ("page", &page.to_string()),
                ("limit", &limit.to_string()),
            ]));
            assert_eq!(options.offset, (options.page - 1) * options.limit);
        }
    }

    #[test]
    fn test_offset_uses_clamped_limit() {
        let options = QueryOptions::from_query(&query(&[("page", "3"), ("limit", "500")]));
        assert_eq!(options.limit, 100);
        assert_eq!(options.offset, 200);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let options = QueryOptions::from_query(&query(&[
            ("page", "99999999999999999999999"),
            ("limit", "100"),
        ]));
        assert_eq!(options.offset, i64::MAX);
    }

    #[test]
    fn test_sort_by_defaults_to_desc() {
        let options = QueryOptions::from_query(&query(&[("sort_by", "created_at")]));
        assert_eq!(options.sort_by(), Some("created_at"));
        assert_eq!(options.sort_order(), Some(SortOrder::Desc));
    }

    #[test]
    fn test_sort_direction_is_kept() {
        let options = QueryOptions::from_query(&query(&[
            ("sort_by", "title"),
            ("sort_direction", "ASC"),
        ]));
        assert_eq!(options.sort_order(), Some(SortOrder::Asc));

        let options = QueryOptions::from_query(&query(&[
            ("sort_by", "title"),
            ("sort_direction", ""),
        ]));
        assert_eq!(options.sort_order(), Some(SortOrder::Desc));
    }

    #[test]
    fn test_sort_direction_without_sort_by_is_ignored() {
        let options = QueryOptions::from_query(&query(&[("sort_direction", "asc")]));
        assert!(options.sort_by().is_none());
        assert!(options.sort_order().is_none());
    }

    #[test]
    fn test_lone_filter_key_is_dropped() {
        let options = QueryOptions::from_query(&query(&[("filter_by", "open")]));
        assert!(options.filter_by().is_none());
        assert!(options.filter_value().is_none());

        let options = QueryOptions::from_query(&query(&[
            ("filter_by", "open"),
            ("filter_values", ""),
        ]));
        assert!(options.filter.is_none());
    }

    #[test]
    fn test_lone_filter_value_is_dropped() {
        let options = QueryOptions::from_query(&query(&[("filter_values", "1,2")]));
        assert!(options.filter.is_none());
    }

    #[test]
    fn test_filter_pair_is_kept() {
        let options = QueryOptions::from_query(&query(&[
            ("filter_by", "recipe_id"),
            ("filter_values", "4, 9,,12"),
        ]));
        assert_eq!(options.filter_by(), Some("recipe_id"));
        assert_eq!(options.filter_value(), Some("4, 9,,12"));
        assert_eq!(
            options.filter.unwrap().values(),
            vec!["4".to_string(), "9".to_string(), "12".to_string()]
        );
    }

    #[test]
    fn test_serialize_omits_unset_fields() {
        let options = QueryOptions::from_query(&query(&[("filter_by", "open")]));
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json, serde_json::json!({ "page": 1, "limit": 10, "offset": 0 }));

        let options = QueryOptions::from_query(&query(&[("sort_by", "created_at")]));
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["sortBy"], "created_at");
        assert_eq!(json["sortOrder"], "desc");
    }

    #[test]
    fn test_pagination_meta_has_more() {
        let options = QueryOptions::from_query(&query(&[("page", "2"), ("limit", "10")]));
        assert!(PaginationMeta::new(25, &options).has_more);
        assert!(!PaginationMeta::new(20, &options).has_more);
        assert!(!PaginationMeta::new(0, &options).has_more);
    }

    #[test]
    fn test_sort_order_sql() {
        assert_eq!(SortOrder::parse("asc").as_sql(), "ASC");
        assert_eq!(SortOrder::parse("sideways").as_sql(), "DESC");
        assert_eq!(SortOrder::Asc.to_string(), "asc");
    }
}
