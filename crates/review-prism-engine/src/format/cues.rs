use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Review line severity categories, in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Tip,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Tip,
    ];

    /// Icon shown in callouts and summary badges.
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
            Severity::Tip => "💡",
        }
    }
}

// Keyword vocabularies cover both UI languages and are matched anywhere
// in the line, case-insensitively. The glyph patterns are the subset that
// gets stripped from the line before display.
const SUCCESS_KEYWORDS: &str = "(?i)✅|✓|通过|成功|good|correct|well";
const ERROR_KEYWORDS: &str = "(?i)❌|✗|错误|失败|error|bug|issue|problem|wrong";
const WARNING_KEYWORDS: &str = "(?i)⚠️|⚠|警告|建议|注意|warning|suggestion|should|recommend";
const TIP_KEYWORDS: &str = "(?i)💡|ℹ️|提示|优化|技巧|info|tip|hint|optimization|consider";

const SUCCESS_GLYPHS: &str = "✅|✓";
const ERROR_GLYPHS: &str = "❌|✗";
const WARNING_GLYPHS: &str = "⚠️|⚠";
const TIP_GLYPHS: &str = "💡|ℹ️";

#[derive(Debug, thiserror::Error)]
pub enum CueError {
    #[error("invalid cue keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Extra keywords per category, typically supplied by the config file.
///
/// Keywords are matched literally (regex metacharacters are escaped) and
/// case-insensitively, like the built-in vocabulary.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueKeywords {
    pub success: Vec<String>,
    pub error: Vec<String>,
    pub warning: Vec<String>,
    pub tip: Vec<String>,
}

impl CueKeywords {
    pub fn is_empty(&self) -> bool {
        self.success.is_empty() && self.error.is_empty() && self.warning.is_empty() && self.tip.is_empty()
    }

    fn for_severity(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Success => &self.success,
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Tip => &self.tip,
        }
    }
}

#[derive(Debug, Clone)]
struct CueRule {
    severity: Severity,
    keywords: Regex,
    glyphs: Regex,
}

/// Keyword/glyph lookup table driving cue classification.
///
/// One rule per category, tried in [`Severity::ALL`] order; the first
/// rule whose keyword pattern matches anywhere in the line wins.
#[derive(Debug, Clone)]
pub struct CueTable {
    rules: Vec<CueRule>,
}

impl CueTable {
    /// Builds the default bilingual table.
    pub fn new() -> Self {
        let rule = |severity, keywords: &str, glyphs: &str| CueRule {
            severity,
            keywords: Regex::new(keywords).expect("invalid cue keyword pattern"),
            glyphs: Regex::new(glyphs).expect("invalid cue glyph pattern"),
        };
        Self {
            rules: vec![
                rule(Severity::Success, SUCCESS_KEYWORDS, SUCCESS_GLYPHS),
                rule(Severity::Error, ERROR_KEYWORDS, ERROR_GLYPHS),
                rule(Severity::Warning, WARNING_KEYWORDS, WARNING_GLYPHS),
                rule(Severity::Tip, TIP_KEYWORDS, TIP_GLYPHS),
            ],
        }
    }

    /// Shared default table; patterns are compiled once per process.
    pub fn shared() -> &'static CueTable {
        static TABLE: OnceLock<CueTable> = OnceLock::new();
        TABLE.get_or_init(CueTable::new)
    }

    /// Returns a copy of this table with extra keywords appended per
    /// category. Blank keywords are ignored.
    pub fn with_extra_keywords(&self, extra: &CueKeywords) -> Result<CueTable, CueError> {
        let mut rules = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let additions: Vec<String> = extra
                .for_severity(rule.severity)
                .iter()
                .map(|kw| kw.trim())
                .filter(|kw| !kw.is_empty())
                .map(regex::escape)
                .collect();
            let keywords = if additions.is_empty() {
                rule.keywords.clone()
            } else {
                Regex::new(&format!("{}|{}", rule.keywords.as_str(), additions.join("|")))?
            };
            rules.push(CueRule {
                severity: rule.severity,
                keywords,
                glyphs: rule.glyphs.clone(),
            });
        }
        Ok(CueTable { rules })
    }

    /// First category whose keyword pattern matches the line.
    pub fn classify(&self, line: &str) -> Option<Severity> {
        self.rules
            .iter()
            .find(|rule| rule.keywords.is_match(line))
            .map(|rule| rule.severity)
    }

    /// Removes the category's glyphs from the line and trims the ends.
    ///
    /// Only glyphs are stripped; keyword text stays visible.
    pub fn strip_glyphs(&self, severity: Severity, line: &str) -> String {
        match self.rules.iter().find(|rule| rule.severity == severity) {
            Some(rule) => rule.glyphs.replace_all(line, "").trim().to_string(),
            None => line.trim().to_string(),
        }
    }
}

impl Default for CueTable {
    fn default() -> Self {
        Self::new()
    }
}
