//! Line-oriented INI parsing.
//!
//! Parsing never fails: lines that fit no rule are dropped. Two behaviors of
//! the text format are worth spelling out because they differ from most INI
//! dialects:
//!
//! - `;` and `#` are not comment markers but line terminators. The character
//!   stream is cut at each occurrence, and whatever follows on the physical
//!   line is parsed as a fresh logical line. `a=1;b=2` therefore produces the
//!   keys `a` and `b`.
//! - A header line keeps none of its bracket characters: `[foo]bar]` names the
//!   section `foobar`.

use log::debug;

use crate::document::{IniDocument, Section};

impl IniDocument {
    /// Parses `text` into a document.
    ///
    /// Sections and keys appear in first-seen order. A repeated section header
    /// merges into the existing section, later values winning per key. Pairs
    /// before the first header are kept only if no header ever appears, under
    /// the empty section name. A final line without a terminator is not
    /// parsed.
    pub fn parse(text: &str) -> Self {
        let mut doc = IniDocument::new();
        let mut section = String::new();
        let mut pending = Section::new();

        for line in logical_lines(text) {
            if line.is_empty() {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                if section.is_empty() {
                    // Pairs accumulated before the first header are discarded.
                    pending.clear();
                } else {
                    commit(&mut doc, &section, std::mem::take(&mut pending));
                }
                section = line.replace(['[', ']'], "").trim().to_string();
            } else if line.contains('=') {
                let mut segments = line.split('=');
                let key = segments.next().unwrap_or_default().trim();
                let value = segments.next().unwrap_or_default().trim();
                if key.is_empty() {
                    debug!("dropping entry with empty key: {line:?}");
                    continue;
                }
                pending.insert(key.to_string(), value.to_string());
            } else {
                debug!("dropping line with no header or '=': {line:?}");
            }
        }

        // The last open section is committed no matter what, empty name included.
        commit(&mut doc, &section, pending);
        doc
    }
}

/// Cuts `text` into trimmed logical lines. `;` and `#` count as `\n`, and
/// anything after the last terminator is discarded.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut buf = String::new();
    for mut c in text.chars() {
        if c == ';' || c == '#' {
            c = '\n';
        }
        if c == '\n' {
            lines.push(buf.trim().to_string());
            buf.clear();
        } else {
            buf.push(c);
        }
    }
    lines
}

fn commit(doc: &mut IniDocument, name: &str, pairs: Section) {
    doc.sections
        .entry(name.to_string())
        .or_insert_with(Section::new)
        .extend(pairs);
}
