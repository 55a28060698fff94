//! Pattern classifier
//!
//! Resolves diagnostic fragments against the ordered classification
//! table. First match wins; a fragment no rule recognizes gets the
//! generic fallback explanation instead of an error, so the engine
//! never fails outright on an unrecognized diagnostic.

use serde::{Deserialize, Serialize};

use crate::rules::ERROR_TABLE;
use crate::segmenter;
use crate::substitutor;

/// Sentinel for a row or column that could not be parsed from the
/// fragment. Callers must treat it as "unknown location".
pub const UNKNOWN_LOCATION: i64 = -1;

/// One classified compiler diagnostic with its localized explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDiagnostic {
    /// Fragment text exactly as produced by the segmenter
    pub raw_error: String,
    /// 1-based source row, or [`UNKNOWN_LOCATION`]
    pub row: i64,
    /// 1-based source column, or [`UNKNOWN_LOCATION`]
    pub column: i64,
    /// Localized explanation of what went wrong
    pub description: String,
    /// Localized suggestion for fixing it
    pub fix: String,
}

/// Segment raw compiler output and resolve every fragment.
///
/// Empty input yields an empty vector; unmatched fragments yield
/// fallback diagnostics, never an error.
pub fn classify(raw: &str) -> Vec<ResolvedDiagnostic> {
    segmenter::segment(raw)
        .iter()
        .map(|fragment| resolve_fragment(fragment))
        .collect()
}

/// Resolve exactly one fragment against the classification table.
pub fn resolve_fragment(fragment: &str) -> ResolvedDiagnostic {
    let (row, column) = parse_location(fragment);

    for rule in ERROR_TABLE.iter() {
        if rule.pattern.is_match(fragment) {
            tracing::debug!(pattern = rule.pattern.as_str(), "rule matched");
            let (description, fix) = substitutor::substitute(
                fragment,
                rule.description,
                rule.resolve_method,
                rule.placeholders,
            );
            return ResolvedDiagnostic {
                raw_error: fragment.to_string(),
                row,
                column,
                description,
                fix,
            };
        }
    }

    tracing::debug!(fragment, "no rule matched, emitting fallback");
    ResolvedDiagnostic {
        raw_error: fragment.to_string(),
        row,
        column,
        description: "まれなエラーが発生しています。".to_string(),
        fix: "TAに尋ねてみてください。".to_string(),
    }
}

/// First two colon-delimited fields of the fragment are row and column.
/// Non-numeric or missing fields degrade to [`UNKNOWN_LOCATION`].
fn parse_location(fragment: &str) -> (i64, i64) {
    let mut fields = fragment.split(':');
    let row = fields
        .next()
        .and_then(|f| f.parse().ok())
        .unwrap_or(UNKNOWN_LOCATION);
    let column = fields
        .next()
        .and_then(|f| f.parse().ok())
        .unwrap_or(UNKNOWN_LOCATION);
    (row, column)
}
