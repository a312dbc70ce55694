use std::sync::OnceLock;

use regex::Regex;

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("invalid bold pattern"))
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("invalid code span pattern"))
}

/// Applies `**bold**` and backtick code-span substitutions.
///
/// The input must already be HTML-escaped. The delimiters are plain ASCII
/// and survive escaping unchanged, and the inner content is passed through
/// as-is, so no entity is ever escaped twice.
pub(crate) fn apply_inline_styles(escaped: &str) -> String {
    let bold = bold_re().replace_all(
        escaped,
        r#"<strong class="font-semibold text-gray-900">$1</strong>"#,
    );
    code_re()
        .replace_all(
            &bold,
            r#"<code class="bg-gray-100 px-1.5 py-0.5 rounded text-xs font-mono text-gray-800">$1</code>"#,
        )
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bold_span() {
        assert_eq!(
            apply_inline_styles("a **b** c"),
            r#"a <strong class="font-semibold text-gray-900">b</strong> c"#
        );
    }

    #[test]
    fn code_span() {
        assert_eq!(
            apply_inline_styles("run `make`"),
            r#"run <code class="bg-gray-100 px-1.5 py-0.5 rounded text-xs font-mono text-gray-800">make</code>"#
        );
    }

    #[test]
    fn multiple_spans_on_one_line() {
        let out = apply_inline_styles("`a` and `b`");
        assert_eq!(out.matches("<code").count(), 2);
    }

    #[test]
    fn unclosed_delimiters_stay_literal() {
        assert_eq!(apply_inline_styles("**open"), "**open");
        assert_eq!(apply_inline_styles("`open"), "`open");
    }

    #[test]
    fn escaped_entities_pass_through_untouched() {
        // Input is post-escape text; the substitution must not re-escape it.
        assert_eq!(
            apply_inline_styles("**a &amp; b**"),
            r#"<strong class="font-semibold text-gray-900">a &amp; b</strong>"#
        );
    }
}
