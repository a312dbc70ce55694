use super::cues::{CueTable, Severity};

/// Per-category line counts backing the compact badge view.
///
/// Counting uses the same cue table as the full formatter but none of its
/// other rules: fences, headings and list markers get no special
/// treatment here, a cue keyword anywhere on a line counts the line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSummary {
    pub success: usize,
    pub error: usize,
    pub warning: usize,
    pub tip: usize,
}

/// Badge display order: problems first, praise after.
const BADGE_ORDER: [Severity; 4] = [
    Severity::Error,
    Severity::Warning,
    Severity::Success,
    Severity::Tip,
];

impl ReviewSummary {
    /// Counts cue lines in a report.
    pub fn scan(text: &str, cues: &CueTable) -> Self {
        let mut summary = Self::default();
        for line in text.split('\n') {
            match cues.classify(line) {
                Some(Severity::Success) => summary.success += 1,
                Some(Severity::Error) => summary.error += 1,
                Some(Severity::Warning) => summary.warning += 1,
                Some(Severity::Tip) => summary.tip += 1,
                None => {}
            }
        }
        summary
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Tip => self.tip,
        }
    }

    pub fn is_empty(&self) -> bool {
        Severity::ALL.iter().all(|&s| self.count(s) == 0)
    }

    /// Renders one badge per non-empty category inside a stacked wrapper.
    pub fn render_badges(&self) -> String {
        let mut html = String::from(r#"<div class="space-y-2">"#);
        for severity in BADGE_ORDER {
            let count = self.count(severity);
            if count > 0 {
                html.push_str(&badge(severity, count));
            }
        }
        html.push_str("</div>");
        html
    }
}

fn badge(severity: Severity, count: usize) -> String {
    let (accent, text_class, label) = match severity {
        Severity::Error => (
            "bg-red-50 border-l-4 border-red-500 p-2",
            "text-red-800",
            format!("❌ 发现 {count} 个问题"),
        ),
        Severity::Warning => (
            "bg-yellow-50 border-l-4 border-yellow-500 p-2",
            "text-yellow-800",
            format!("⚠️ {count} 条建议"),
        ),
        Severity::Success => (
            "bg-green-50 border-l-4 border-green-500 p-2",
            "text-green-800",
            format!("✅ {count} 项通过"),
        ),
        Severity::Tip => (
            "bg-blue-50 border-l-4 border-blue-500 p-2",
            "text-blue-800",
            format!("💡 {count} 条优化建议"),
        ),
    };
    format!(
        r#"<div class="{accent}"><p class="{text_class} font-medium text-sm">{label}</p></div>"#
    )
}
