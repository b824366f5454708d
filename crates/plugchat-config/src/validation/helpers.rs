//! Shared validation helpers used by the section validators.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[A-Za-z0-9.\-]+(:\d{1,5})?(/\S*)?$").unwrap());

static METHOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(GET|POST|PUT|DELETE)$").unwrap());

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range<T: PartialOrd + Display>(
    errors: &mut Vec<String>,
    name: &str,
    value: T,
    min: T,
    max: T,
) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

pub(crate) fn validate_url(errors: &mut Vec<String>, name: &str, value: &str) {
    if !URL_RE.is_match(value) {
        errors.push(format!("{name} = '{value}' is not an http(s) URL"));
    }
}

pub(crate) fn validate_method(errors: &mut Vec<String>, name: &str, value: &str) {
    if !METHOD_RE.is_match(value) {
        errors.push(format!(
            "{name} = '{value}' must be one of GET, POST, PUT, DELETE"
        ));
    }
}

pub(crate) fn validate_env_var(errors: &mut Vec<String>, name: &str, value: &str) {
    if !ENV_VAR_RE.is_match(value) {
        errors.push(format!("{name} = '{value}' is not a valid environment variable name"));
    }
}

pub(crate) fn validate_not_blank(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}
