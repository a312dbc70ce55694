/// `#`-run heading knowledge.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Size classes by heading level; levels past the table reuse the
    /// smallest size.
    const SIZES: [&'static str; 4] = ["text-xl", "text-lg", "text-base", "text-sm"];

    /// Parses a trimmed line into `(level, text)`.
    ///
    /// Level is the length of the leading `#` run; text is the remainder
    /// after the run and any following whitespace.
    pub fn parse(trimmed: &str) -> Option<(usize, &str)> {
        if !trimmed.starts_with(Self::MARKER) {
            return None;
        }
        let level = trimmed.chars().take_while(|&c| c == Self::MARKER).count();
        let text = trimmed[level..].trim_start();
        Some((level, text))
    }

    /// Visual size class for a heading level, clamped at the table end.
    pub fn size_class(level: usize) -> &'static str {
        Self::SIZES[(level - 1).min(Self::SIZES.len() - 1)]
    }
}
