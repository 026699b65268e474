//! List request parameters and result pages.

use crate::error::{ScimError, ScimResult};
use crate::resource::user::UserResource;
use crate::schema::SCHEMA_LIST_RESPONSE;
use serde_json::{Value, json};
use url::form_urlencoded;

/// Paging parameters of a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Requested page size; `0` asks for the total count only.
    pub count: usize,
    /// 1-based start index.
    pub start_index: usize,
}

impl ListParams {
    /// Create paging parameters.
    pub fn new(count: usize, start_index: usize) -> Self {
        Self { count, start_index }
    }

    /// Parameters that ask only for the total number of records.
    pub fn count_only() -> Self {
        Self::new(0, 1)
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self::new(100, 1)
    }
}

/// List parameters and raw filter text pulled from a request query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub params: ListParams,
    /// `filter` parameter, still form-encoded; the store decodes it.
    pub filter: Option<String>,
}

impl ListQuery {
    /// Parse `count`, `startIndex` and `filter` from a URL query string.
    ///
    /// A leading `?` is ignored. Missing `count` falls back to
    /// `default_count`; missing or zero `startIndex` means 1. The filter is
    /// re-encoded after the pair is split so the store decodes it exactly
    /// once; an empty one is treated as absent.
    pub fn from_query_string(query: &str, default_count: usize) -> ScimResult<Self> {
        let mut params = ListParams::new(default_count, 1);
        let mut filter = None;

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "count" => params.count = parse_non_negative("count", &value)?,
                "startIndex" => {
                    params.start_index = parse_non_negative("startIndex", &value)?.max(1)
                }
                "filter" if !value.is_empty() => {
                    let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
                    filter = Some(encoded);
                }
                _ => {}
            }
        }

        Ok(Self { params, filter })
    }
}

// SCIM says negative values are interpreted as 0 for count and 1 for startIndex.
fn parse_non_negative(name: &str, value: &str) -> ScimResult<usize> {
    let parsed: i64 = value.trim().parse().map_err(|_| {
        ScimError::invalid_request(format!("{} must be an integer, got '{}'", name, value))
    })?;
    Ok(parsed.max(0) as usize)
}

/// A page of list results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListPage {
    /// Number of records in the store, regardless of filtering.
    pub total_results: usize,
    /// Resources included in this page; metadata is omitted.
    pub resources: Vec<UserResource>,
}

impl ListPage {
    /// SCIM ListResponse representation.
    pub fn to_json(&self, start_index: usize) -> Value {
        let resources: Vec<Value> = self.resources.iter().map(|r| r.to_json(None)).collect();
        json!({
            "schemas": [SCHEMA_LIST_RESPONSE],
            "totalResults": self.total_results,
            "itemsPerPage": resources.len(),
            "startIndex": start_index.max(1),
            "Resources": resources,
        })
    }
}
