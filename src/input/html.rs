//! Low-level HTML scanning, tailored to id-addressed data tables.
//! Deliberately naive: case-insensitive ASCII tag matching, no support
//! for nested tables. Good enough for the flat timesheet markup this
//! tool targets, with no parser dependency to carry.

use crate::errors::AppResult;
use crate::input::TableData;
use std::fs;
use std::path::Path;

/// An HTML document held as raw text, queried by table id.
pub struct HtmlDocument {
    raw: String,
}

impl HtmlDocument {
    pub fn load(path: &Path) -> AppResult<Self> {
        Ok(Self {
            raw: fs::read_to_string(path)?,
        })
    }

    pub fn from_str(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }

    /// Find the `<table>` element with the given id and extract its rows.
    /// Returns None when the id is absent, or present only on a
    /// non-table element.
    pub fn table_by_id(&self, id: &str) -> Option<TableData> {
        let lc = lowercase_ascii(&self.raw);
        let mut from = 0usize;

        while let Some(rel) = lc[from..].find("<table") {
            let start = from + rel;
            let open_end = self.raw[start..].find('>')? + start + 1;
            let attrs = &self.raw[start + "<table".len()..open_end - 1];

            if attr_value(attrs, "id").as_deref() == Some(id) {
                let close = lc[open_end..].find("</table")? + open_end;
                return Some(parse_rows(&self.raw[open_end..close]));
            }
            from = open_end;
        }
        None
    }
}

/// Extract an attribute value from the inside of an opening tag.
/// Handles `id="x"`, `id='x'` and unquoted `id=x`, case-insensitive on
/// the attribute name.
fn attr_value(attrs: &str, name: &str) -> Option<String> {
    let lc = lowercase_ascii(attrs);
    let needle = format!("{}=", name);
    let mut search = 0usize;

    loop {
        let rel = lc.get(search..)?.find(&needle)?;
        let at = search + rel;

        // Must start an attribute name, not end a longer one (data-id=...).
        let starts_attr = at == 0 || {
            let prev = lc.as_bytes()[at - 1];
            !(prev.is_ascii_alphanumeric() || prev == b'-' || prev == b'_')
        };
        if !starts_attr {
            search = at + needle.len();
            continue;
        }

        let rest = &attrs[at + needle.len()..];
        let value = match rest.chars().next() {
            Some('"') => rest[1..].split('"').next()?,
            Some('\'') => rest[1..].split('\'').next()?,
            _ => rest
                .split(|c: char| c.is_whitespace() || c == '>')
                .next()?,
        };
        return Some(value.to_string());
    }
}

/// Split the inner HTML of a table into rows of cleaned cell text.
fn parse_rows(inner: &str) -> TableData {
    let mut rows = Vec::new();
    let mut pos = 0usize;

    while let Some((start, end)) = next_block(inner, "tr", pos) {
        rows.push(parse_cells(&inner[start..end]));
        pos = end;
    }

    TableData { rows }
}

/// Cells of one `<tr>` block: the next `<td>` or `<th>`, whichever comes
/// first, until neither is left.
fn parse_cells(row_block: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;

    loop {
        let td = next_block(row_block, "td", pos);
        let th = next_block(row_block, "th", pos);

        let block = match (td, th) {
            (Some(a), Some(b)) => Some(if a.0 < b.0 { a } else { b }),
            (a, None) => a,
            (None, b) => b,
        };
        let Some((start, end)) = block else { break };

        cells.push(clean_text(&row_block[start..end]));
        pos = end;
    }

    cells
}

/// Find the next `<tag ...>...</tag>` block from `from` onwards and
/// return the byte range of its inner content, case-insensitive.
fn next_block(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = lowercase_ascii(s);
    let open = format!("<{}", tag);
    let close = format!("</{}", tag);

    let mut search = from;
    let start_tag = loop {
        let rel = lc.get(search..)?.find(&open)?;
        let at = search + rel;

        // Reject prefixes of longer tag names (<tr vs <track).
        match lc.as_bytes().get(at + open.len()).copied() {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') => break at,
            None => return None,
            _ => search = at + open.len(),
        }
    };

    let inner_start = s[start_tag..].find('>')? + start_tag + 1;
    let inner_end = lc[inner_start..].find(&close)? + inner_start;
    Some((inner_start, inner_end))
}

/// Strip nested tags, decode the common entities and collapse whitespace.
fn clean_text(block: &str) -> String {
    let mut out = String::with_capacity(block.len());
    let mut in_tag = false;
    for ch in block.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&decode_entities(&out))
}

/// Minimal entity decoding: `&nbsp;` and `&amp;` cover the tables seen in
/// the wild.
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Collapse whitespace runs into a single space and trim.
fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// ASCII-only lowercasing for tag/attribute matching.
fn lowercase_ascii(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}
