// src/entry.rs

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::core::html::strip_tags;
use crate::error::{Error, Result};

const CASE: &str = "Case ";
const DOT: &str = ".";
const NBSP: &str = "&nbsp;";
const PLACE: &str = "Place ";
const SPAN: &str = "</span>";

/// One concordance hit as reported by the search engine.
///
/// `case_number` is the engine's running hit ordinal. It is informational
/// only: two requeries of the same passage may number it differently, so it
/// is deliberately excluded from equality and hashing. Identity is the
/// `(place_number, work, position, text)` tuple.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    case_number: u32,
    place_number: u32,
    work: String,
    position: String,
    text: String,
}

impl Entry {
    pub fn new(
        case_number: u32,
        place_number: u32,
        work: String,
        position: String,
        text: String,
    ) -> Result<Self> {
        if case_number == 0 {
            return Err(Error::invalid("caseNumber must be strictly positive"));
        }
        if place_number == 0 {
            return Err(Error::invalid("placeNumber must be strictly positive"));
        }
        Ok(Self { case_number, place_number, work, position, text })
    }

    /// Parse one `<p title=…` result fragment.
    ///
    /// Fixed marker walk, matching the page format byte for byte:
    /// digits after `"Case "` up to `"."`, digits after `"Place "` up to
    /// `"."`, the citation after the next `</span>` up to `"&nbsp;"`, and
    /// everything after that tag-stripped as the surrounding text.
    pub fn parse(fragment: &str) -> Result<Self> {
        let rest = seek_after(fragment, CASE)?;
        let case_number = read_number(rest)?;

        let rest = seek_after(rest, PLACE)?;
        let place_number = read_number(rest)?;

        let rest = seek_after(rest, SPAN)?;
        let position = read_until(rest, NBSP)?;

        let work = match position.find(',') {
            Some(n) => &position[..n],
            None => position,
        };

        let text = strip_tags(&rest[position.len() + NBSP.len()..]).replace(NBSP, " ");

        Entry::new(case_number, place_number, s!(work), s!(position), text)
    }

    pub fn case_number(&self) -> u32 {
        self.case_number
    }

    pub fn place_number(&self) -> u32 {
        self.place_number
    }

    pub fn work(&self) -> &str {
        &self.work
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

// Identity excludes case_number; keep Hash in sync with PartialEq.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.place_number == other.place_number
            && self.work == other.work
            && self.position == other.position
            && self.text == other.text
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.place_number.hash(state);
        self.work.hash(state);
        self.position.hash(state);
        self.text.hash(state);
    }
}

/// Consecutive cases that cite the same place, merged into one entry with the
/// text of every case kept in arrival order. Equality is by `place_number`
/// alone: two consolidated entries are the same corpus location no matter
/// which query produced them.
#[derive(Debug, Clone)]
pub struct ConsolidatedEntry {
    place_number: u32,
    work: String,
    position: String,
    text: Vec<String>,
}

impl ConsolidatedEntry {
    pub fn new(
        place_number: u32,
        work: String,
        position: String,
        text: Vec<String>,
    ) -> Result<Self> {
        if place_number == 0 {
            return Err(Error::invalid("placeNumber must be strictly positive"));
        }
        Ok(Self { place_number, work, position, text })
    }

    pub fn place_number(&self) -> u32 {
        self.place_number
    }

    pub fn work(&self) -> &str {
        &self.work
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn text(&self) -> &[String] {
        &self.text
    }

    pub fn push_text(&mut self, text: String) {
        self.text.push(text);
    }

    /// All text segments joined by single spaces, trimmed.
    pub fn joined_text(&self) -> String {
        self.text.join(" ").trim().to_string()
    }
}

impl From<Entry> for ConsolidatedEntry {
    fn from(entry: Entry) -> Self {
        Self {
            place_number: entry.place_number,
            work: entry.work,
            position: entry.position,
            text: vec![entry.text],
        }
    }
}

impl PartialEq for ConsolidatedEntry {
    fn eq(&self, other: &Self) -> bool {
        self.place_number == other.place_number
    }
}

impl Eq for ConsolidatedEntry {}

/* ---------- marker helpers ---------- */

fn seek_after<'a>(s: &'a str, marker: &'static str) -> Result<&'a str> {
    let i = s.find(marker).ok_or(Error::MissingMarker { marker })?;
    Ok(&s[i + marker.len()..])
}

fn read_until<'a>(s: &'a str, marker: &'static str) -> Result<&'a str> {
    let i = s.find(marker).ok_or(Error::MissingMarker { marker })?;
    Ok(&s[..i])
}

fn read_number(s: &str) -> Result<u32> {
    let digits = read_until(s, DOT)?;
    digits
        .parse()
        .map_err(|_| Error::BadNumber(s!(digits)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment() -> &'static str {
        concat!(
            "<p title=\"Super Sent., lib. 1 q. 1 a. 2 ad 2.\">",
            "<span class=\"caseNumber\">Case 1.&nbsp;</span>",
            "<span class=\"ref\">",
            "<span class=\"placeNumber\">Place 2.&nbsp;</span>",
            "Super Sent., lib. 1 q. 1 a. 2 ad 2.&nbsp;</span>",
            "[...]",
            "<sup><font size=\"-1\">-1</font></sup>",
            "&nbsp;some text",
            "</p>",
        )
    }

    #[test]
    fn parse_full_fragment() {
        let entry = Entry::parse(fragment()).unwrap();
        assert_eq!(entry.case_number(), 1);
        assert_eq!(entry.place_number(), 2);
        assert_eq!(entry.work(), "Super Sent.");
        assert_eq!(entry.position(), "Super Sent., lib. 1 q. 1 a. 2 ad 2.");
        assert_eq!(entry.text(), "[...]-1 some text");
    }

    #[test]
    fn work_without_comma_equals_position() {
        let line = concat!(
            "<p title=\"De ente.\">",
            "<span>Case 3.&nbsp;</span>",
            "<span>Place 4.&nbsp;</span>",
            "De ente et essentia&nbsp;text here</p>",
        );
        let entry = Entry::parse(line).unwrap();
        assert_eq!(entry.work(), "De ente et essentia");
        assert_eq!(entry.position(), "De ente et essentia");
    }

    #[test]
    fn missing_markers_fail() {
        assert!(matches!(
            Entry::parse("no markers at all"),
            Err(Error::MissingMarker { marker: "Case " })
        ));
        assert!(matches!(
            Entry::parse("Case 1.&nbsp;nothing else"),
            Err(Error::MissingMarker { marker: "Place " })
        ));
        assert!(matches!(
            Entry::parse("Case 1. Place 2. no span"),
            Err(Error::MissingMarker { marker: "</span>" })
        ));
    }

    #[test]
    fn non_numeric_case_fails() {
        let line = "Case one. Place 2.</span>pos&nbsp;text";
        assert!(matches!(Entry::parse(line), Err(Error::BadNumber(_))));
    }

    #[test]
    fn zero_numbers_rejected() {
        assert!(Entry::new(0, 1, s!(), s!(), s!()).is_err());
        assert!(Entry::new(1, 0, s!(), s!(), s!()).is_err());
        assert!(ConsolidatedEntry::new(0, s!(), s!(), vec![]).is_err());
    }

    #[test]
    fn equality_ignores_case_number() {
        let a = Entry::new(1, 7, s!("w"), s!("p"), s!("t")).unwrap();
        let b = Entry::new(9, 7, s!("w"), s!("p"), s!("t")).unwrap();
        assert_eq!(a, b);

        let c = Entry::new(1, 8, s!("w"), s!("p"), s!("t")).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn consolidated_equality_is_place_only() {
        let a = ConsolidatedEntry::new(5, s!("w1"), s!("p1"), vec![s!("x")]).unwrap();
        let b = ConsolidatedEntry::new(5, s!("w2"), s!("p2"), vec![s!("y")]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn joined_text_spaces_and_trims() {
        let mut e = ConsolidatedEntry::new(1, s!("w"), s!("p"), vec![s!("abc")]).unwrap();
        e.push_text(s!("def"));
        assert_eq!(e.joined_text(), "abc def");

        let e = ConsolidatedEntry::new(1, s!("w"), s!("p"), vec![s!("abc"), s!()]).unwrap();
        assert_eq!(e.joined_text(), "abc");
    }
}
