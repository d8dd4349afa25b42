// src/query.rs

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Headword → form codes, as listed on the engine's forms screen.
const WELL_KNOWN_FORMS: &str = include_str!("well_known_forms.properties");

/// One query line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// A headword, optionally restricted to numeric form codes.
    Term { term: String, forms: Vec<u32> },
    /// A lemma reference (`#…`) or quoted phrase, sent to the engine as-is.
    /// These skip the term screen entirely.
    Raw { text: String },
}

impl Query {
    /// Parse one query line.
    ///
    /// - `"quoted phrase"` and `#lemma` lines pass through raw;
    /// - otherwise the first token is the term and any further tokens must be
    ///   numeric form codes;
    /// - a bare term falls back to the well-known forms table (possibly
    ///   empty).
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(Error::invalid("query cannot be empty"));
        }
        if line.starts_with('"') || line.starts_with('#') {
            return Ok(Query::Raw { text: s!(line) });
        }

        let mut tokens = line.split_whitespace();
        let term = s!(tokens.next().unwrap_or_default());
        let mut forms = Vec::new();
        for token in tokens {
            let code = token
                .parse()
                .map_err(|_| Error::invalid(format!("invalid form code {token:?}")))?;
            forms.push(code);
        }
        if forms.is_empty() {
            forms = well_known_forms(&term);
        }
        Ok(Query::Term { term, forms })
    }

    /// The value sent as the `text` form field.
    pub fn text(&self) -> &str {
        match self {
            Query::Term { term, .. } => term,
            Query::Raw { text } => text,
        }
    }
}

/// Form codes for headwords whose forms are known up front, so that a bare
/// term on the command line searches all of them. Case-insensitive lookup;
/// unknown terms get an empty list.
pub fn well_known_forms(term: &str) -> Vec<u32> {
    static TABLE: OnceLock<HashMap<String, Vec<u32>>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let mut map = HashMap::new();
        for line in WELL_KNOWN_FORMS.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((term, codes)) = line.split_once('=') {
                let codes: Vec<u32> = codes
                    .split(',')
                    .filter_map(|c| c.trim().parse().ok())
                    .collect();
                map.insert(term.trim().to_ascii_lowercase(), codes);
            }
        }
        map
    });
    table
        .get(&term.to_ascii_lowercase())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_ens() {
        assert_eq!(
            well_known_forms("ens"),
            vec![78, 79, 80, 81, 82, 83, 84, 85, 86, 87]
        );
        assert_eq!(well_known_forms("ENS"), well_known_forms("ens"));
    }

    #[test]
    fn well_known_unknown_is_empty() {
        assert!(well_known_forms("forma").is_empty());
    }

    #[test]
    fn parse_term_with_forms() {
        let q = Query::parse("esse 12 34").unwrap();
        assert_eq!(
            q,
            Query::Term { term: s!("esse"), forms: vec![12, 34] }
        );
    }

    #[test]
    fn parse_bare_term_uses_table() {
        match Query::parse("ens").unwrap() {
            Query::Term { term, forms } => {
                assert_eq!(term, "ens");
                assert_eq!(forms.len(), 10);
            }
            other => panic!("expected term query, got {other:?}"),
        }
    }

    #[test]
    fn parse_phrase_and_lemma_are_raw() {
        assert_eq!(
            Query::parse("\"esse commune\"").unwrap(),
            Query::Raw { text: s!("\"esse commune\"") }
        );
        assert_eq!(
            Query::parse("#10045").unwrap(),
            Query::Raw { text: s!("#10045") }
        );
    }

    #[test]
    fn parse_rejects_empty_and_bad_forms() {
        assert!(Query::parse("   ").is_err());
        assert!(Query::parse("ens 12 x").is_err());
    }
}
