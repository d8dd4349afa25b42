// src/crawl.rs

use log::{debug, info};
use reqwest::blocking::{Client, Response};
use reqwest::header::SET_COOKIE;

use crate::core::net;
use crate::entry::{ConsolidatedEntry, Entry};
use crate::error::{Error, Result};
use crate::protocol;
use crate::query::Query;
use crate::store::{self, EntrySet};

const TITLE: &str = "<p title=";

const FOUND: &str = "Found";
const CASES_IN: &str = " cases in ";

/// One query's session cookie, captured from the 'new search' response and
/// attached to every later step. Never reused across queries.
#[derive(Debug)]
pub struct Session(String);

impl Session {
    /// The token is the Set-Cookie value up to, excluding, the first `;`.
    fn from_set_cookie(header: &str) -> Option<Self> {
        let token = header.split(';').next().unwrap_or_default().trim();
        if token.is_empty() {
            None
        } else {
            Some(Session(s!(token)))
        }
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

/// Drives the engine's screen sequence for one query:
/// new search → term → forms → works → concordances.
///
/// The term screen is skipped for raw (lemma / phrase) queries and the forms
/// screen whenever no explicit forms were requested. Every step must answer
/// with a success status; anything else aborts the whole run.
pub struct Crawler {
    client: Client,
    endpoint: String,
    text: String,
    forms: Vec<u32>,
    select_term: bool,
}

impl Crawler {
    pub fn with_endpoint(query: Query, endpoint: impl Into<String>) -> Result<Self> {
        let (text, forms, select_term) = match query {
            Query::Term { term, forms } => (term, forms, true),
            Query::Raw { text } => (text, Vec::new(), false),
        };
        if text.trim().is_empty() {
            return Err(Error::invalid("term cannot be null or empty"));
        }
        Ok(Self {
            client: net::client()?,
            endpoint: endpoint.into(),
            text,
            forms,
            select_term,
        })
    }

    /// Run the whole sequence and return the deduplicated entries.
    pub fn search(&self) -> Result<EntrySet> {
        let session = self.new_search()?;
        if self.select_term {
            self.send_term(&session)?;
            if !self.forms.is_empty() {
                self.send_forms(&session)?;
            }
        }
        self.send_works(&session)?;
        self.send_concordances(&session)
    }

    /// `search` plus consolidation of this query's own results.
    pub fn crawl(&self) -> Result<Vec<ConsolidatedEntry>> {
        Ok(store::consolidate(self.search()?.into_sorted()))
    }

    /// Step 1: empty POST, no cookie. The response opens the session.
    fn new_search(&self) -> Result<Session> {
        let response = self.post(None, s!())?;
        let response = ensure_success("new search", response)?;
        let header = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .ok_or(Error::NoSessionCookie)?;
        let session = Session::from_set_cookie(header).ok_or(Error::NoSessionCookie)?;
        debug!("opened session for {:?}", self.text);
        Ok(session)
    }

    /// Step 2: establish the headword.
    fn send_term(&self, session: &Session) -> Result<()> {
        let response = self.post(Some(session), protocol::term_body(&self.text))?;
        ensure_success("term", response)?;
        Ok(())
    }

    /// Step 3: restrict to the requested inflected forms.
    fn send_forms(&self, session: &Session) -> Result<()> {
        let body = protocol::forms_body(&self.text, &self.forms);
        let response = self.post(Some(session), body)?;
        ensure_success("forms", response)?;
        Ok(())
    }

    /// Step 4: select all authentic works.
    fn send_works(&self, session: &Session) -> Result<()> {
        let response = self.post(Some(session), protocol::works_body(&self.text))?;
        ensure_success("works", response)?;
        Ok(())
    }

    /// Step 5: fetch the concordances page and parse every result row.
    fn send_concordances(&self, session: &Session) -> Result<EntrySet> {
        let body = protocol::concordances_body(&self.text);
        let response = self.post(Some(session), body)?;
        let response = ensure_success("concordances", response)?;
        let body = response.text()?;

        log_hit_count(&body);

        let mut entries = EntrySet::new();
        for fragment in result_fragments(&body) {
            entries.insert(Entry::parse(fragment)?);
        }
        debug!("{} distinct entries for {:?}", entries.len(), self.text);
        Ok(entries)
    }

    fn post(&self, session: Option<&Session>, body: String) -> Result<Response> {
        net::post_form(
            &self.client,
            &self.endpoint,
            session.map(Session::token),
            body,
        )
    }
}

fn ensure_success(step: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Protocol { step, status: status.as_u16() })
    }
}

/// Report the engine's own hit count. Observability only; nothing is parsed
/// out of it.
fn log_hit_count(body: &str) {
    if let (Some(m), Some(n)) = (body.find(FOUND), body.find(CASES_IN)) {
        if m < n {
            info!("{} cases", &body[m..n]);
        }
    }
}

/// Each result row starts with `<p title=` and runs to the next such marker
/// (or the end of the body).
fn result_fragments(body: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut pos = match body.find(TITLE) {
        Some(i) => i,
        None => return fragments,
    };
    loop {
        match body[pos + TITLE.len()..].find(TITLE) {
            Some(next) => {
                let end = pos + TITLE.len() + next;
                fragments.push(&body[pos..end]);
                pos = end;
            }
            None => {
                fragments.push(&body[pos..]);
                return fragments;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_token_stops_at_semicolon() {
        let s = Session::from_set_cookie("JSESSIONID=abc123; Path=/; HttpOnly").unwrap();
        assert_eq!(s.token(), "JSESSIONID=abc123");
    }

    #[test]
    fn empty_set_cookie_is_rejected() {
        assert!(Session::from_set_cookie("").is_none());
        assert!(Session::from_set_cookie("; Path=/").is_none());
    }

    #[test]
    fn fragments_split_on_marker() {
        let body = "junk<p title=\"a\">one</p>\n<p title=\"b\">two</p>trailer";
        let frags = result_fragments(body);
        assert_eq!(frags.len(), 2);
        assert!(frags[0].starts_with("<p title=\"a\">"));
        assert!(frags[0].ends_with("</p>\n"));
        assert!(frags[1].ends_with("trailer"));
    }

    #[test]
    fn no_marker_no_fragments() {
        assert!(result_fragments("<html>Found 0 cases in 0 places</html>").is_empty());
    }

    #[test]
    fn empty_term_is_rejected() {
        let q = Query::Term { term: s!("  "), forms: vec![] };
        assert!(Crawler::with_endpoint(q, "http://localhost/it").is_err());
    }
}
