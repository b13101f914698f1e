//! Endpoint path templates.
//!
//! Endpoint groups declare their paths as templates with `{name}`
//! placeholders, e.g. `rest/socialActions/{target}/comments/{comment}`.
//! [`build_path`] fills them in, percent-encoding each value so URNs such as
//! `urn:li:share:1` become valid path segments.
//!
//! # Example
//!
//! ```rust
//! use linkedin_api::rest::build_path;
//! use linkedin_api::Urn;
//!
//! let post = Urn::share("6844785523593134080");
//! let path = build_path("rest/posts/{id}", &[("id", &post)]);
//! assert_eq!(path, "rest/posts/urn%3Ali%3Ashare%3A6844785523593134080");
//! ```

use std::fmt::Display;

/// Interpolates `{name}` placeholders with percent-encoded values.
///
/// Placeholders without a matching value are left untouched and logged.
#[must_use]
pub fn build_path(template: &str, values: &[(&str, &dyn Display)]) -> String {
    let mut result = template.to_string();

    for (name, value) in values {
        let placeholder = format!("{{{name}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }

    let missing = placeholders(&result);
    if !missing.is_empty() {
        tracing::warn!("Path '{}' has unfilled placeholders: {:?}", template, missing);
    }

    result
}

/// Returns the placeholder names a template still contains.
fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        names.push(&after[..close]);
        rest = &after[close + 1..];
    }
    names
}
