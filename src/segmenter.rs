//! Diagnostic segmenter
//!
//! Splits raw GCC output from a failed remote compile into one text
//! fragment per located diagnostic. The remote toolchain always compiles
//! the submitted unit as `prog.c`, so every diagnostic line is prefixed
//! with that marker; splitting on it isolates one candidate per message.
//!
//! A candidate survives only if it looks like a genuine diagnostic:
//! it must carry a `line:column:` location and mention `error` or
//! `warning`. Banner lines ("In function 'main':"), source echo lines
//! and link-stage messages are dropped silently.

use once_cell::sync::Lazy;
use regex::Regex;

/// File-name marker prefixed to every diagnostic line by the remote
/// toolchain's fixed compilation unit name.
pub const SOURCE_MARKER: &str = "prog.c:";

static LOCATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+:\d+:").expect("location pattern must compile"));

/// Split raw compiler output into located diagnostic fragments,
/// preserving source order.
///
/// Raw text with no located diagnostics (empty input, pure link errors)
/// yields an empty vector; the caller distinguishes that from a
/// successful compile via the compiler's status code, never via the
/// absence of fragments.
pub fn segment(raw: &str) -> Vec<String> {
    raw.split(SOURCE_MARKER)
        .filter(|candidate| is_diagnostic(candidate))
        .map(|candidate| candidate.to_string())
        .collect()
}

/// A genuine diagnostic carries a `line:column:` location and an
/// error/warning marker.
fn is_diagnostic(candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    if !LOCATED.is_match(candidate) {
        tracing::debug!(candidate, "dropping candidate without line:column location");
        return false;
    }
    if !candidate.contains("error") && !candidate.contains("warning") {
        tracing::debug!(candidate, "dropping candidate without error/warning marker");
        return false;
    }
    true
}
