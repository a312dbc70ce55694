//! Review-report formatting.
//!
//! Converts the plain-text (Markdown-flavored) output of an AI review job
//! into an HTML fragment for direct display: headings, lists and fenced
//! code survive as blocks, severity-cued lines become tinted callouts,
//! and every piece of report text is HTML-escaped on the way through.
//!
//! The whole pass is line-local with a single piece of lookahead state
//! (inside/outside a code fence); there is no grammar and no recursion.

pub mod classify;
pub mod cues;
mod inline;
pub mod kinds;
mod render;
pub mod summary;

use serde::{Deserialize, Serialize};

use classify::{LineClass, ReviewLineClassifier};
use cues::CueTable;
use kinds::CodeFence;
use summary::ReviewSummary;

/// What to do with buffered code lines when the report ends while still
/// inside a fence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedFence {
    /// Emit the buffered lines as a best-effort code block.
    #[default]
    Flush,
    /// Drop the buffered lines, matching the dashboard's historical
    /// output.
    Discard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub unterminated_fence: UnterminatedFence,
}

/// Formats raw review reports into styled HTML fragments.
///
/// Holds no per-call state; one formatter can serve any number of calls,
/// concurrently, with independent inputs.
pub struct ReviewFormatter {
    classifier: ReviewLineClassifier,
    options: FormatOptions,
}

impl ReviewFormatter {
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self::with_cue_table(CueTable::shared().clone(), options)
    }

    pub fn with_cue_table(cues: CueTable, options: FormatOptions) -> Self {
        Self {
            classifier: ReviewLineClassifier::new(cues),
            options,
        }
    }

    /// Formats a raw review report into an HTML fragment.
    ///
    /// Total over its input: any string (or no string) produces markup,
    /// never an error. `None` and the empty string produce a fixed
    /// placeholder. All report text is escaped exactly once; fenced
    /// content is captured verbatim and escaped at flush time.
    pub fn format(&self, text: Option<&str>) -> String {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return render::EMPTY_PLACEHOLDER.to_string();
        };

        let mut blocks: Vec<String> = Vec::new();
        let mut in_code_block = false;
        let mut code_buffer = String::new();

        for line in text.split('\n') {
            // Fences outrank every other rule, including while inside a
            // block: the closing fence must never be swallowed as content.
            if CodeFence::is_fence(line) {
                if in_code_block {
                    blocks.push(render::code_block(&code_buffer));
                    code_buffer.clear();
                    in_code_block = false;
                } else {
                    in_code_block = true;
                }
                continue;
            }
            if in_code_block {
                code_buffer.push_str(line);
                code_buffer.push('\n');
                continue;
            }

            match self.classifier.classify(line) {
                LineClass::Blank => blocks.push(render::spacer().to_string()),
                LineClass::Heading { level, text } => blocks.push(render::heading(level, &text)),
                LineClass::Cue { severity, text } => blocks.push(render::callout(severity, &text)),
                LineClass::ListItem { text } => blocks.push(render::list_item(&text)),
                LineClass::Text => blocks.push(render::paragraph(line)),
            }
        }

        if in_code_block
            && self.options.unterminated_fence == UnterminatedFence::Flush
            && !code_buffer.is_empty()
        {
            blocks.push(render::code_block(&code_buffer));
        }

        blocks.join("\n")
    }

    /// Reduces a report to per-category counts rendered as compact
    /// badges. Shares the full formatter's cue table and nothing else.
    pub fn format_simple(&self, text: Option<&str>) -> String {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return render::EMPTY_PLACEHOLDER.to_string();
        };
        ReviewSummary::scan(text, self.classifier.cues()).render_badges()
    }
}

impl Default for ReviewFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a review report with the default cue table and options.
pub fn format_review_result(text: Option<&str>) -> String {
    ReviewFormatter::new().format(text)
}

/// Renders the compact badge summary with the default cue table.
pub fn format_review_result_simple(text: Option<&str>) -> String {
    ReviewFormatter::new().format_simple(text)
}
