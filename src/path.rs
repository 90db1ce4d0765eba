//! Path template rendering with per-segment percent-encoding.

use crate::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters is encoded, so a bound
/// value containing `/` cannot introduce an extra path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Renders a path template such as `/products/{product_id}/plans/{plan_id}`
/// by substituting each `{name}` placeholder with its bound value.
///
/// Fails with [`Error::Validation`] if a placeholder has no bound value or
/// the bound value is empty. Pure and deterministic; no I/O.
pub(crate) fn render_path(template: &str, params: &[(&str, String)]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| {
            Error::Validation(format!("malformed path template `{template}`"))
        })?;
        let name = &after[..end];
        let value = params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| {
                Error::Validation(format!("missing required path parameter `{name}`"))
            })?;
        if value.is_empty() {
            return Err(Error::Validation(format!(
                "path parameter `{name}` must not be empty"
            )));
        }
        out.extend(utf8_percent_encode(value, PATH_SEGMENT));
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
