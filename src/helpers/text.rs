//! Plain-text helpers for markdown bodies

use lazy_static::lazy_static;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Strip markdown syntax, keeping only the readable text
pub fn markdown_to_text(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let mut text = String::with_capacity(markdown.len());
    let mut in_code_block = false;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                text.push(' ');
            }
            Event::Text(t) | Event::Code(t) if !in_code_block => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => text.push(' '),
            _ => {}
        }
    }

    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// First `max_chars` characters of the body as plain text, cut at a word
/// boundary and marked with an ellipsis when shortened
pub fn plain_text_excerpt(markdown: &str, max_chars: usize) -> String {
    let text = markdown_to_text(markdown);
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut: String = text.chars().take(max_chars).collect();
    let cut = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end_matches([',', '.', ';', ':', ' ']))
}

/// Estimated reading time in whole minutes, at least 1 for any text
pub fn estimate_reading_time(markdown: &str, words_per_minute: usize) -> usize {
    let words = markdown_to_text(markdown).split_whitespace().count();
    if words == 0 {
        return 0;
    }
    words.div_ceil(words_per_minute.max(1))
}
