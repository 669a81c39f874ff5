// src/specs/fields.rs
//! Ordered fallback chains for field extraction.
//!
//! Every field a site spec wants is described as a chain of probes,
//! evaluated in order until one produces a non-empty value. A probe that
//! does not match — or a selector/pattern that fails to parse — is a
//! silent miss, never an error: the only failure mode of extraction is
//! an absent field.

use regex::Regex;
use scraper::{Html, Selector};

use crate::core::sanitize::normalize_ws;

/// One way of locating a field's value in a parsed page.
#[derive(Clone, Copy, Debug)]
pub enum Probe {
    /// Text content of the first element matching a CSS selector.
    Css(&'static str),
    /// Attribute value of the first element matching a CSS selector.
    CssAttr(&'static str, &'static str),
    /// First capture group (or whole match) of a regex run over the
    /// page's entire visible text.
    TextRe(&'static str),
    /// First text node containing the literal substring; the whole
    /// node is the value. ("Lieferzeit" lines have no stable markup.)
    TextNode(&'static str),
    /// Like `TextNode`, but the value is a regex capture within that
    /// node ("Artikel-Nr.: 1286850" → "1286850").
    TextNodeRe(&'static str, &'static str),
}

/// Walk the chain; first probe yielding a non-empty value wins.
pub fn first_match(doc: &Html, chain: &[Probe]) -> Option<String> {
    chain
        .iter()
        .find_map(|p| run_probe(doc, p).filter(|v| !v.is_empty()))
}

fn run_probe(doc: &Html, probe: &Probe) -> Option<String> {
    match probe {
        Probe::Css(sel) => {
            let sel = Selector::parse(sel).ok()?;
            let el = doc.select(&sel).next()?;
            Some(normalize_ws(&el.text().collect::<String>()))
        }
        Probe::CssAttr(sel, attr) => {
            let sel = Selector::parse(sel).ok()?;
            let el = doc.select(&sel).next()?;
            el.value().attr(attr).map(|v| v.trim().to_string())
        }
        Probe::TextRe(pattern) => {
            let re = Regex::new(pattern).ok()?;
            let text = visible_text(doc);
            let caps = re.captures(&text)?;
            let m = caps.get(1).or_else(|| caps.get(0))?;
            Some(m.as_str().to_string())
        }
        Probe::TextNode(needle) => {
            text_node_containing(doc, needle).map(|n| normalize_ws(&n))
        }
        Probe::TextNodeRe(needle, pattern) => {
            let node = text_node_containing(doc, needle)?;
            let re = Regex::new(pattern).ok()?;
            let caps = re.captures(&node)?;
            let m = caps.get(1).or_else(|| caps.get(0))?;
            Some(m.as_str().to_string())
        }
    }
}

/// All text nodes of the document joined. Deliberately naive: a regex
/// over this will happily match inside unrelated sections of the page
/// (the 13-digit EAN probe is the known offender).
pub fn visible_text(doc: &Html) -> String {
    let mut out = String::new();
    for t in doc.root_element().text() {
        out.push_str(t);
        out.push(' ');
    }
    out
}

fn text_node_containing(doc: &Html, needle: &str) -> Option<String> {
    doc.root_element()
        .text()
        .find(|t| t.contains(needle))
        .map(|t| t.to_string())
}
