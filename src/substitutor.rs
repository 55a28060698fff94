//! Placeholder substitutor
//!
//! Rewrites a rule's description/fix templates by binding the quoted
//! tokens of a diagnostic fragment to the rule's declared placeholder
//! names. Binding is strictly positional: the i-th `'token'` found in
//! the fragment fills the i-th declared `{name}`, whatever its semantic
//! role. Rule authors order the placeholder list to match the
//! compiler's token-emission order for that diagnostic class.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of non-whitespace enclosed in the apostrophe quoting
/// convention GCC uses for identifiers, types and punctuators.
static QUOTED_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'\S+'").expect("quoted-token pattern must compile"));

/// Fill `{name}` markers in both templates from the fragment's quoted
/// tokens and return the rewritten (description, fix) pair.
///
/// Degradations, none of which are errors:
/// - no declared placeholders, or no quoted tokens found: templates are
///   returned unchanged
/// - fewer tokens than declared names: the surplus `{name}` markers
///   survive as literal text
/// - more tokens than declared names: the surplus tokens are ignored
pub fn substitute(
    fragment: &str,
    description: &str,
    resolve_method: &str,
    placeholders: &[&str],
) -> (String, String) {
    if placeholders.is_empty() {
        return (description.to_string(), resolve_method.to_string());
    }

    let tokens: Vec<&str> = QUOTED_TOKEN
        .find_iter(fragment)
        .map(|m| m.as_str())
        .collect();
    if tokens.is_empty() {
        return (description.to_string(), resolve_method.to_string());
    }

    let mut description = description.to_string();
    let mut resolve_method = resolve_method.to_string();
    for (token, name) in tokens.iter().zip(placeholders.iter()) {
        let marker = format!("{{{name}}}");
        tracing::debug!(%marker, %token, "binding placeholder");
        description = description.replace(&marker, token);
        resolve_method = resolve_method.replace(&marker, token);
    }
    (description, resolve_method)
}
