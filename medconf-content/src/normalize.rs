//! Rich content normalization.
//!
//! Content strings are either pre-formed markup or plain text. Markup is
//! passed to the renderer whole, through a [`Sanitizer`]; plain text is
//! segmented line by line into paragraphs, bullet lists and spacers.

use serde::{Deserialize, Serialize};

/// A classified unit of renderable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum RenderableBlock {
    Paragraph(String),
    List(Vec<String>),
    Spacer,
    /// Markup that went through the sanitizer; rendered as-is.
    Markup(String),
}

/// Cleans markup before it reaches the renderer.
///
/// Classification (markup or not) and sanitization are separate steps;
/// implementations only see strings already classified as markup.
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, markup: &str) -> String;
}

/// Passes markup through untouched.
///
/// Only appropriate when the content-management backend sanitizes on
/// publish.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustedMarkup;

impl Sanitizer for TrustedMarkup {
    fn sanitize(&self, markup: &str) -> String {
        markup.to_string()
    }
}

/// Escapes markup so it renders as literal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeMarkup;

impl Sanitizer for EscapeMarkup {
    fn sanitize(&self, markup: &str) -> String {
        let mut out = String::with_capacity(markup.len());
        for c in markup.chars() {
            match c {
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '&' => out.push_str("&amp;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }
}

impl<F> Sanitizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn sanitize(&self, markup: &str) -> String {
        self(markup)
    }
}

/// True when the trimmed input opens with a markup tag (`<p`, `</div`,
/// `<!--`, `<!DOCTYPE`, ...).
pub fn is_markup(raw: &str) -> bool {
    let mut chars = raw.trim_start().chars();
    chars.next() == Some('<')
        && chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

/// Normalizes `raw` with markup passed through untouched.
pub fn normalize(raw: &str) -> Vec<RenderableBlock> {
    normalize_with(raw, &TrustedMarkup)
}

/// Normalizes `raw`, sending markup through `sanitizer`.
///
/// Whitespace-only input yields no blocks, unlike the per-line rule where
/// every blank line becomes a spacer: `"\n\n"` gives `[]`, not three
/// spacers.
pub fn normalize_with(raw: &str, sanitizer: &dyn Sanitizer) -> Vec<RenderableBlock> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    if is_markup(raw) {
        return vec![RenderableBlock::Markup(sanitizer.sanitize(raw))];
    }

    let mut blocks = Vec::new();
    let mut list: Vec<String> = Vec::new();

    // Split on '\n' rather than `lines()` so a trailing blank line still
    // produces its spacer.
    for line in raw.split('\n') {
        let line = line.trim();
        if let Some(item) = bullet_item(line) {
            list.push(item.to_string());
            continue;
        }
        flush_list(&mut list, &mut blocks);
        if line.is_empty() {
            blocks.push(RenderableBlock::Spacer);
        } else {
            blocks.push(RenderableBlock::Paragraph(line.to_string()));
        }
    }
    flush_list(&mut list, &mut blocks);
    blocks
}

fn flush_list(list: &mut Vec<String>, blocks: &mut Vec<RenderableBlock>) {
    if !list.is_empty() {
        blocks.push(RenderableBlock::List(std::mem::take(list)));
    }
}

/// Strips a bullet marker (`-`, `•`, `*` followed by whitespace) from a
/// trimmed line.
fn bullet_item(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    let marker = chars.next().filter(|c| matches!(c, '-' | '•' | '*'))?;
    if !chars.next().is_some_and(char::is_whitespace) {
        return None;
    }
    Some(line[marker.len_utf8()..].trim())
}

/// Renders blocks back to plain text; the inverse of [`normalize`] for
/// plain-text input.
pub fn blocks_to_text(blocks: &[RenderableBlock]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for block in blocks {
        match block {
            RenderableBlock::Paragraph(text) | RenderableBlock::Markup(text) => {
                lines.push(text.clone())
            }
            RenderableBlock::List(items) => {
                lines.extend(items.iter().map(|item| format!("- {}", item)))
            }
            RenderableBlock::Spacer => lines.push(String::new()),
        }
    }
    lines.join("\n")
}
