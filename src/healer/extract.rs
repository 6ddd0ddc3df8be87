//! C1: link extractor.
//!
//! A real CommonMark+GFM parse via `pulldown-cmark`, not a regex scan — this
//! is what lets nested parens in destinations, fenced/indented code, inline
//! code spans, and footnote definitions fall out "for free" instead of
//! needing bespoke handling, matching the technique the pack's own
//! `link_validator.rs`/`lint-links.rs` use.

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag};
use std::path::Path;

use super::model::{LinkKind, LinkRef};
use super::resolve::split_fragment;

fn cmark_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES | Options::ENABLE_STRIKETHROUGH
}

/// Strip a leading YAML frontmatter block (`---` ... `---`) and return the
/// remaining body. Byte offsets are tracked against the *original* string by
/// the caller, so line numbers stay correct without a separate "add N lines"
/// step (spec.md §4.1's offset requirement is satisfied by never discarding
/// the frontmatter's byte length).
pub fn strip_frontmatter(raw: &str) -> &str {
    if !raw.starts_with("---") {
        return raw;
    }
    let mut rest = raw;
    let first_newline = match rest.find('\n') {
        Some(i) => i,
        None => return raw,
    };
    if rest[..first_newline].trim_end_matches('\r') != "---" {
        return raw;
    }
    rest = &rest[first_newline + 1..];
    let mut consumed = first_newline + 1;
    loop {
        let line_end = rest.find('\n').map(|i| i + 1).unwrap_or(rest.len());
        let line = &rest[..line_end];
        if line.trim_end_matches(['\n', '\r']) == "---" {
            return &raw[consumed + line_end..];
        }
        if line_end == rest.len() {
            // unterminated frontmatter: treat the whole file as body
            return raw;
        }
        consumed += line_end;
        rest = &rest[line_end..];
    }
}

fn byte_offset_to_line(content: &str, offset: usize) -> usize {
    let clamped = offset.min(content.len());
    1 + content.as_bytes()[..clamped].iter().filter(|&&b| b == b'\n').count()
}

/// Extract every real Markdown link from a file's raw bytes, in file order.
pub fn extract_links(source_file: &Path, raw_content: &str) -> Vec<LinkRef> {
    let body = strip_frontmatter(raw_content);
    let body_start = raw_content.len() - body.len();

    let options = cmark_options();
    let parser = Parser::new_ext(body, options);

    // Reference-style definitions (`[label]: target "title"`) are scanned up
    // front during `Parser::new_ext`'s first pass, so this is safe to read
    // before consuming the parser for its event stream.
    let ref_defs: Vec<_> = parser.reference_definitions().values().cloned().collect();

    let mut links = Vec::new();

    for (event, range) in parser.into_offset_iter() {
        let (kind, dest) = match event {
            Event::Start(Tag::Image(_, dest, _)) => (LinkKind::Image, dest),
            Event::Start(Tag::Link(LinkType::Email, ..)) => continue, // bare-email autolink
            Event::Start(Tag::Link(LinkType::Autolink, dest, _)) => (LinkKind::Autolink, dest),
            Event::Start(Tag::Link(_, dest, _)) => (LinkKind::Inline, dest),
            _ => continue,
        };

        let abs_offset = body_start + range.start;
        let line = byte_offset_to_line(raw_content, abs_offset);
        let (destination, fragment) = split_fragment(dest.as_ref());
        links.push(LinkRef {
            kind,
            destination: destination.to_string(),
            fragment: fragment.map(|s| s.to_string()),
            source_file: source_file.to_path_buf(),
            file_line: line,
            byte_offset: abs_offset,
        });
    }

    for def in ref_defs {
        let abs_offset = body_start + def.span.start;
        let line = byte_offset_to_line(raw_content, abs_offset);
        let (destination, fragment) = split_fragment(def.dest.as_ref());
        links.push(LinkRef {
            kind: LinkKind::ReferenceDef,
            destination: destination.to_string(),
            fragment: fragment.map(|s| s.to_string()),
            source_file: source_file.to_path_buf(),
            file_line: line,
            byte_offset: abs_offset,
        });
    }

    links.sort_by_key(|l| l.byte_offset);
    links
}
