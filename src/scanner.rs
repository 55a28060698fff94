//! Line mistake scanner
//!
//! Flags a small set of well-known beginner mistakes (assignment inside
//! an `if` condition, stray semicolon after a `for` header) by testing
//! every source line against the mistake table. Works on raw source
//! text, so learners get feedback even when the code does not compile.
//!
//! Source arrives as a single string with escaped line breaks: the
//! transport represents a newline as the two-character sequence `\n`,
//! never as a control character.

use serde::{Deserialize, Serialize};

use crate::rules::MISTAKE_TABLE;

/// Escaped newline used by the editor/transport as the line delimiter.
pub const LINE_DELIMITER: &str = r"\n";

/// One flagged beginner mistake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MistakeFinding {
    /// 1-based line index in the submitted source
    pub row: usize,
    /// Always 0; column tracking is not attempted for this scanner
    pub column: usize,
    /// Localized explanation of the mistake
    pub description: String,
}

/// Test every line against every mistake rule, in line-then-rule order.
///
/// Every match produces one finding, so a single line can yield several
/// findings when multiple rules fire on it.
pub fn scan_mistakes(source: &str) -> Vec<MistakeFinding> {
    source
        .split(LINE_DELIMITER)
        .enumerate()
        .flat_map(|(index, line)| {
            MISTAKE_TABLE.iter().filter_map(move |rule| {
                if rule.pattern.is_match(line) {
                    tracing::debug!(line, pattern = rule.pattern.as_str(), "mistake found");
                    Some(MistakeFinding {
                        row: index + 1,
                        column: 0,
                        description: rule.description.to_string(),
                    })
                } else {
                    None
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_in_condition_and_stray_semicolon() {
        let source = r"if(x=5);\nfor(i=0;i<5;i++);";
        let findings = scan_mistakes(source);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].row, 1);
        assert_eq!(findings[0].column, 0);
        assert_eq!(
            findings[0].description,
            "ifで等しいかを判定するには、=ではなく==を使用します。"
        );
        assert_eq!(findings[1].row, 2);
        assert_eq!(findings[1].column, 0);
        assert_eq!(findings[1].description, "for文の括弧の直後に;があります。");
    }

    #[test]
    fn test_clean_source_yields_no_findings() {
        let source = r"#include <stdio.h>\nint main(void) {\n    return 0;\n}";
        assert!(scan_mistakes(source).is_empty());
    }

    #[test]
    fn test_spaced_spelling_is_caught_too() {
        let findings = scan_mistakes(r"if (x=5) { y = 1; }");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].row, 1);
    }

    #[test]
    fn test_one_line_can_yield_multiple_findings() {
        // Both the spaced and unspaced `for` rules fire on this line.
        let findings = scan_mistakes(r"for (i=0;i<5;i++); for(j=0;j<5;j++);");
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.row == 1));
    }

    #[test]
    fn test_rows_are_one_based() {
        let findings = scan_mistakes(r"int x;\nif(x=1) x = 2;");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].row, 2);
    }
}
