//! HTML emission for classified review lines.
//!
//! The class vocabulary is the dashboard's Tailwind set, kept
//! byte-compatible so fragments drop straight into the existing pages.
//! Every dynamic text path is escaped here, exactly once.

use std::borrow::Cow;

use super::cues::Severity;
use super::inline;
use super::kinds::Heading;

/// Fixed fragment shown when a report has no text at all.
pub const EMPTY_PLACEHOLDER: &str = r#"<p class="text-gray-500">暂无结果</p>"#;

/// Visual treatment of a severity callout.
struct CalloutStyle {
    container: &'static str,
    icon: &'static str,
    text: &'static str,
}

fn callout_style(severity: Severity) -> CalloutStyle {
    match severity {
        Severity::Success => CalloutStyle {
            container: "bg-green-50 rounded",
            icon: "text-green-600",
            text: "text-green-800 text-sm",
        },
        Severity::Error => CalloutStyle {
            container: "bg-red-50 rounded",
            icon: "text-red-600",
            text: "text-red-800 text-sm font-medium",
        },
        Severity::Warning => CalloutStyle {
            container: "bg-yellow-50 rounded",
            icon: "text-yellow-600",
            text: "text-yellow-800 text-sm",
        },
        Severity::Tip => CalloutStyle {
            container: "bg-blue-50 rounded",
            icon: "text-blue-600",
            text: "text-blue-800 text-sm",
        },
    }
}

pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

pub(crate) fn spacer() -> &'static str {
    r#"<div class="h-2"></div>"#
}

pub(crate) fn heading(level: usize, text: &str) -> String {
    let size = Heading::size_class(level);
    format!(
        r#"<h{level} class="{size} font-bold text-gray-900 mt-4 mb-2">{}</h{level}>"#,
        escape(text)
    )
}

pub(crate) fn callout(severity: Severity, text: &str) -> String {
    let style = callout_style(severity);
    format!(
        r#"<div class="flex items-start gap-2 my-1 p-2 {container}"><span class="{icon_class} flex-shrink-0">{icon}</span><span class="{text_class}">{text}</span></div>"#,
        container = style.container,
        icon_class = style.icon,
        icon = severity.icon(),
        text_class = style.text,
        text = escape(text),
    )
}

pub(crate) fn list_item(text: &str) -> String {
    format!(
        r#"<div class="flex items-start gap-2 my-1 ml-4"><span class="text-gray-400 flex-shrink-0">•</span><span class="text-gray-700 text-sm">{}</span></div>"#,
        escape(text)
    )
}

pub(crate) fn paragraph(line: &str) -> String {
    let styled = inline::apply_inline_styles(&escape(line));
    format!(r#"<p class="text-gray-700 text-sm my-1">{styled}</p>"#)
}

pub(crate) fn code_block(content: &str) -> String {
    format!(
        r#"<pre class="bg-gray-800 text-gray-100 p-3 rounded text-xs overflow-x-auto my-2"><code>{}</code></pre>"#,
        escape(content)
    )
}
