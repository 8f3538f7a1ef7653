use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single glossary entry: headword plus its explanatory text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// The glossary headword
    #[serde(rename = "Term")]
    pub term: String,
    /// Explanatory text, possibly joined from several source lines
    #[serde(rename = "Definition")]
    pub definition: String,
}

/// Matches a chapter citation like "(Ch. 12)" anywhere in a line
fn chapter_citation_regex() -> Regex {
    Regex::new(r"Ch. \d+").unwrap()
}

/// Split raw glossary text into term/definition entries.
///
/// Each entry starts with a lowercase headword running up to the first
/// capital letter of its definition and ends on the line carrying the
/// chapter citation. Lines are trimmed and space-joined along the way.
/// An entry whose citation never arrives is dropped; a line carrying
/// both the headword and the citation yields a complete entry on its own.
pub fn segment<I, S>(lines: I) -> Vec<GlossaryEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let citation = chapter_citation_regex();
    let mut entries = Vec::new();
    let mut term = String::new();
    let mut definition = String::new();
    let mut collecting = false;

    for line in lines {
        let line = line.as_ref().trim();

        if !collecting {
            let (head, rest) = split_at_first_capital(line);
            term = head;
            definition = rest;
            collecting = true;

            if citation.is_match(line) {
                entries.push(GlossaryEntry {
                    term: std::mem::take(&mut term),
                    definition: std::mem::take(&mut definition),
                });
                collecting = false;
            }
        } else if citation.is_match(line) {
            definition.push(' ');
            definition.push_str(line);
            entries.push(GlossaryEntry {
                term: std::mem::take(&mut term),
                definition: std::mem::take(&mut definition),
            });
            collecting = false;
        } else {
            definition.push(' ');
            definition.push_str(line);
        }
    }

    entries
}

/// Split a line into (term, start of definition) at its first capital
/// letter. The character immediately before the capital is dropped from
/// the term. A line with no capital becomes a term with an empty
/// definition.
fn split_at_first_capital(line: &str) -> (String, String) {
    let mut prev = 0;
    for (idx, ch) in line.char_indices() {
        if ch.is_uppercase() {
            return (line[..prev].to_string(), line[idx..].to_string());
        }
        prev = idx;
    }

    if !line.is_empty() {
        warn!("no capital boundary in {:?}, keeping whole line as term", line);
    }
    (line.to_string(), String::new())
}
