//! Anchor-marker recognition for redirect stubs.
//!
//! A redirect stub's description is nothing but an HTML anchor,
//! `<a id="TARGET"></a>`, left behind when the catalogue was extracted
//! from a reference page.

/// Extract the target id from an anchor-marker description.
///
/// Surrounding whitespace and whitespace between the attribute parts are
/// allowed; the id may be single- or double-quoted. Anything else in the
/// description means it is not a marker.
///
/// ```
/// use cdict_catalog::parse_anchor;
///
/// assert_eq!(parse_anchor(r#"<a id="id-exit"></a>"#), Some("id-exit"));
/// assert_eq!(parse_anchor(" <a id = 'x' ></a> "), Some("x"));
/// assert_eq!(parse_anchor("Exits the program."), None);
/// ```
pub fn parse_anchor(description: &str) -> Option<&str> {
    let rest = description.trim().strip_prefix("<a")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix("id")?;
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();

    let quote = rest.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    let rest = &rest[1..];
    let close = rest.find(quote)?;
    let target = rest[..close].trim();
    if target.is_empty() {
        return None;
    }

    let rest = rest[close + 1..].trim_start().strip_prefix('>')?;
    let rest = rest.trim_start().strip_prefix("</a>")?;
    rest.trim().is_empty().then_some(target)
}
