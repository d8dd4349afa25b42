// src/runner.rs

use std::path::PathBuf;

use log::info;

use crate::crawl::Crawler;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::file;
use crate::params::Params;
use crate::store::{self, EntrySet};

/// Summary of what was produced.
pub struct RunSummary {
    pub cases: usize,
    pub entries: usize,
    pub files_written: Vec<PathBuf>,
}

/// Run every query line in order, then merge and write the results.
///
/// Strictly sequential: a query's five screens complete before the next
/// query starts, and any protocol failure aborts the run before anything is
/// written. Output happens only after every line succeeded.
pub fn run(params: &Params) -> Result<RunSummary> {
    if params.queries.is_empty() {
        return Err(Error::invalid("no query given"));
    }

    let mut sets: Vec<EntrySet> = Vec::with_capacity(params.queries.len());
    for query in &params.queries {
        let crawler = Crawler::with_endpoint(query.clone(), &params.endpoint)?;
        let set = crawler.search()?;
        info!("query {:?}: {} distinct cases", query.text(), set.len());
        sets.push(set);
    }

    // Concatenate per-query results in query order; consolidation is
    // adjacency-based across the whole sequence.
    let entries: Vec<Entry> = sets.into_iter().flat_map(EntrySet::into_sorted).collect();
    let cases = entries.len();

    let count = if params.raw {
        file::write_entries_csv(&params.out_csv, &entries)?;
        file::write_entries_json(&params.out_json, &entries)?;
        cases
    } else {
        let consolidated = store::consolidate(entries);
        file::write_consolidated_csv(&params.out_csv, &consolidated)?;
        file::write_consolidated_json(&params.out_json, &consolidated)?;
        consolidated.len()
    };

    Ok(RunSummary {
        cases,
        entries: count,
        files_written: vec![params.out_csv.clone(), params.out_json.clone()],
    })
}
