use std::sync::OnceLock;

use regex::Regex;

/// List marker knowledge: symbolic bullets and ordinal prefixes.
///
/// The marker style is not preserved in output; every list item renders
/// with the same neutral bullet glyph.
pub struct ListMarker;

impl ListMarker {
    fn bullet_re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^\s*[-*•]\s+").expect("invalid bullet pattern"))
    }

    fn ordinal_re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^\s*\d+\.\s+").expect("invalid ordinal pattern"))
    }

    /// Whether the line starts with a bullet or ordinal marker.
    pub fn is_marked(line: &str) -> bool {
        Self::bullet_re().is_match(line) || Self::ordinal_re().is_match(line)
    }

    /// Strips the leading marker, numeric or symbolic.
    pub fn strip(line: &str) -> String {
        let without_bullet = Self::bullet_re().replace(line, "");
        Self::ordinal_re().replace(&without_bullet, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- dash item")]
    #[case("* star item")]
    #[case("• glyph item")]
    #[case("1. first")]
    #[case("  12. indented ordinal")]
    #[case("   - indented dash")]
    fn marked_lines(#[case] line: &str) {
        assert!(ListMarker::is_marked(line));
    }

    #[rstest]
    #[case("plain text")]
    #[case("-unspaced")]
    #[case("1.unspaced")]
    #[case("a - b")]
    fn unmarked_lines(#[case] line: &str) {
        assert!(!ListMarker::is_marked(line));
    }

    #[rstest]
    #[case("- dash item", "dash item")]
    #[case("* star item", "star item")]
    #[case("3. third", "third")]
    #[case("  - indented", "indented")]
    fn strip_marker(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(ListMarker::strip(line), expected);
    }

    #[test]
    fn strip_removes_stacked_markers() {
        // Both strips run in sequence, so a bullet followed by an ordinal
        // loses both prefixes.
        assert_eq!(ListMarker::strip("- 1. doubled"), "doubled");
    }
}
