//! Single-clause list filters.
//!
//! A filter has the form `<attribute> <operator> "<value>"`, e.g.
//! `userName eq "bjensen"`. All RFC 7644 comparison operators are parsed,
//! but only `eq` can be evaluated; the rest are rejected with
//! [`ScimError::InvalidFilter`] instead of being treated as equality.
//!
//! ```rust
//! use scim_user_store::filter::{Filter, FilterOperator};
//!
//! let filter = Filter::parse("userName%20eq%20%22bjensen%22").unwrap();
//! assert_eq!(filter.attribute, "userName");
//! assert_eq!(filter.operator, FilterOperator::Eq);
//! assert_eq!(filter.value, "bjensen");
//! ```

use crate::error::{ScimError, ScimResult};
use crate::resource::Attributes;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use percent_encoding::percent_decode_str;

/// Comparison operator of a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Eq,
    Ne,
    Co,
    Sw,
    Ew,
    Gt,
    Ge,
    Lt,
    Le,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Co => "co",
            Self::Sw => "sw",
            Self::Ew => "ew",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Le => "le",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = ScimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eq" => Ok(Self::Eq),
            "ne" => Ok(Self::Ne),
            "co" => Ok(Self::Co),
            "sw" => Ok(Self::Sw),
            "ew" => Ok(Self::Ew),
            "gt" => Ok(Self::Gt),
            "ge" => Ok(Self::Ge),
            "lt" => Ok(Self::Lt),
            "le" => Ok(Self::Le),
            other => Err(ScimError::invalid_filter(format!(
                "unknown operator '{}'",
                other
            ))),
        }
    }
}

/// A parsed `<attribute> <operator> "<value>"` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub attribute: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl Filter {
    /// URL-decode and parse raw filter text from a query string.
    pub fn parse(raw: &str) -> ScimResult<Self> {
        Self::parse_decoded(&query_unescape(raw))
    }

    /// Parse filter text that is already decoded.
    ///
    /// The value is everything after the operator with surrounding quotes
    /// removed, so quoted values may contain spaces.
    pub fn parse_decoded(text: &str) -> ScimResult<Self> {
        let text = text.trim();
        let (attribute, rest) = split_token(text);
        let (operator, value) = split_token(rest);
        if attribute.is_empty() || operator.is_empty() || value.is_empty() {
            return Err(ScimError::invalid_filter(format!(
                "expected '<attribute> <operator> \"<value>\"', got '{}'",
                text
            )));
        }

        Ok(Self {
            attribute: attribute.to_string(),
            operator: operator.parse()?,
            value: value.trim_matches('"').to_string(),
        })
    }

    /// Fail unless the operator can be evaluated.
    pub fn ensure_supported(&self) -> ScimResult<()> {
        match self.operator {
            FilterOperator::Eq => Ok(()),
            other => Err(ScimError::invalid_filter(format!(
                "operator '{}' is not supported, only 'eq' is",
                other
            ))),
        }
    }

    /// Whether a record's attributes satisfy the clause.
    ///
    /// Only string attributes can match; `active eq "true"` never matches a
    /// boolean `true`.
    pub fn matches(&self, attributes: &Attributes) -> bool {
        match (self.operator, attributes.get(&self.attribute)) {
            (FilterOperator::Eq, Some(Value::String(stored))) => *stored == self.value,
            _ => false,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.attribute, self.operator, self.value)
    }
}

fn split_token(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim_start()),
        None => (text, ""),
    }
}

/// Decode `%XX` escapes and `+` the way query string values are decoded.
///
/// Invalid UTF-8 after decoding is replaced rather than rejected.
pub fn query_unescape(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}
