//! Classification and mistake rule tables
//!
//! Two ordered, immutable tables built once at process start:
//! - `ERROR_TABLE`: recognizes GCC diagnostic classes and carries the
//!   localized explanation / fix templates for each
//! - `MISTAKE_TABLE`: placeholder-free per-line patterns for common
//!   beginner mistakes, usable before the code even compiles
//!
//! Table order is load-bearing: the classifier selects the FIRST rule
//! whose pattern matches, so a rule that binds two quoted tokens must
//! precede a near-identical rule that binds one.

use once_cell::sync::Lazy;
use regex::Regex;

/// One entry of the diagnostic classification table.
///
/// `placeholders` names the `{slot}` markers used by both templates, in
/// the order the compiler emits the corresponding quoted tokens for this
/// diagnostic class. Binding is positional, not semantic.
pub struct ClassificationRule {
    /// Pattern recognizing one diagnostic class in the fragment text
    pub pattern: Regex,
    /// Localized explanation template, may contain `{slot}` markers
    pub description: &'static str,
    /// Localized fix template, may contain `{slot}` markers
    pub resolve_method: &'static str,
    /// Placeholder names in token-emission order
    pub placeholders: &'static [&'static str],
}

/// One entry of the per-line mistake table. No placeholders.
pub struct MistakeRule {
    /// Pattern tested against a single source line
    pub pattern: Regex,
    /// Localized explanation of the mistake
    pub description: &'static str,
}

fn rule(
    pattern: &str,
    description: &'static str,
    resolve_method: &'static str,
    placeholders: &'static [&'static str],
) -> ClassificationRule {
    ClassificationRule {
        pattern: Regex::new(pattern).expect("classification pattern must compile"),
        description,
        resolve_method,
        placeholders,
    }
}

/// Ordered diagnostic classification table. To teach the engine a new
/// diagnostic class, add an entry here, minding the first-match order.
pub static ERROR_TABLE: Lazy<Vec<ClassificationRule>> = Lazy::new(|| {
    vec![
        rule(
            r"expected '\S+' before '\S+'",
            "{position}の前に、{name}があるはずですが、忘れているようです。",
            "{position}の前に、{name}を追加してください。",
            &["name", "position"],
        ),
        rule(
            r"expected declaration or statement at end of input",
            "閉じの中カッコの数が足りません。",
            "開きカッコと閉じカッコの対応が取れているか確認してください。",
            &[],
        ),
        // Two-token variant must stay ahead of the general one-token rule below.
        rule(
            r"implicit declaration of function '\S+'; did you mean '\S+'? ",
            "宣言されていない関数{name1}を使おうとしています。{name2}の間違いですか？",
            "関数{name1}を宣言するか、正しい関数名{name2}に直してください。",
            &["name1", "name2"],
        ),
        rule(
            r"implicit declaration of function '\S+' ",
            "宣言されていない関数{name}を使おうとしています。",
            "関数{name}を宣言するか、正しい関数名に直してください。",
            &["name"],
        ),
        rule(
            r"\S+: No such file or directory",
            "{name}は存在しないファイルです。",
            "{name}というファイルを作成するか、正しいファイル名（パス）に直してください",
            &["name"],
        ),
        rule(
            r"incompatible implicit declaration of built-in function '\S+'",
            "{name}は存在しないファイルです。",
            "{name}というファイルを作成するか、正しいファイル名（パス）に直してください",
            &["name"],
        ),
        rule(
            r"undeclared",
            "宣言されていない変数{name}を使おうとしています。",
            "変数{name}を宣言するか、正しい変数名に直してください。",
            &["name"],
        ),
        rule(
            r"suggest parentheses around assignment used as truth value",
            "真理値として使用される代入を括弧で囲むことを提案します",
            "等しいかの比較には=ではなく、==を使用します。",
            &[],
        ),
        rule(
            r"'\S+' is used uninitialized",
            "{name}が初期化されずに使用されています。",
            "{name}を初期化してから加算やインクリメントをしてください。",
            &["name"],
        ),
        rule(
            r"format '\S+' expects argument of type '\S+', but argument 2 has type '\S' ",
            "フォーマットの{type1}は{type2}型の値を出すためのものですが、実際に渡されているものは{type3}型です。",
            "扱う方を揃えてください。。",
            &["type1", "type2", "type3"],
        ),
        rule(
            r"too few arguments to function '\S+'",
            "関数{name}に渡す引数が足りません。",
            "関数{name}に渡す必要がある引数を確認して、それを追加してください。",
            &["name"],
        ),
        rule(
            r"too many arguments to function '\S+'",
            "関数{name}に渡す引数が多すぎます。",
            "関数{name}に渡す必要がある引数を確認して、必要のない引数を消してください。",
            &["name"],
        ),
        // Overlaps with the stricter format rule above; kept in this order
        // on purpose, so the stricter rule screens single-character types
        // first and this one catches the rest.
        rule(
            r"format '\S+' expects argument of type '\S+', but argument 2 has type '\S+'",
            "フォーマットの{type1}は{type2}型の値を出すためのものですが、実際に渡されているものは{type3}型です。",
            "{type2}の値を出すつもりでない場合は、渡す変数の型{type3}に合わせて、フォーマットの{type1}を変更してください。",
            &["type1", "type2", "type3"],
        ),
    ]
});

/// Ordered per-line mistake table. Spaced and unspaced spellings are
/// separate entries so both `if (x=5)` and `if(x=5)` are caught.
pub static MISTAKE_TABLE: Lazy<Vec<MistakeRule>> = Lazy::new(|| {
    let mistake = |pattern: &str, description: &'static str| MistakeRule {
        pattern: Regex::new(pattern).expect("mistake pattern must compile"),
        description,
    };
    vec![
        mistake(
            r"if (\S+=\S+)",
            "ifで等しいかを判定するには、=ではなく==を使用します。",
        ),
        mistake(
            r"if(\S+=\S+)",
            "ifで等しいかを判定するには、=ではなく==を使用します。",
        ),
        mistake(r"for (\S+);", "for文の括弧の直後に;があります。"),
        mistake(r"for(\S+);", "for文の括弧の直後に;があります。"),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_table_builds() {
        // Force the Lazy so a bad pattern fails loudly here, not mid-request
        assert!(!ERROR_TABLE.is_empty());
        assert!(!MISTAKE_TABLE.is_empty());
    }

    #[test]
    fn test_two_token_rule_precedes_one_token_rule() {
        let two = ERROR_TABLE
            .iter()
            .position(|r| r.placeholders == ["name1", "name2"])
            .unwrap();
        let one = ERROR_TABLE
            .iter()
            .position(|r| r.pattern.as_str().starts_with("implicit declaration") && r.placeholders == ["name"])
            .unwrap();
        assert!(two < one, "specific rule must come before the general one");
    }

    #[test]
    fn test_placeholder_slots_appear_in_templates() {
        for r in ERROR_TABLE.iter() {
            for slot in r.placeholders {
                let marker = format!("{{{slot}}}");
                assert!(
                    r.description.contains(&marker) || r.resolve_method.contains(&marker),
                    "declared placeholder {marker} unused in rule {}",
                    r.pattern.as_str()
                );
            }
        }
    }
}
