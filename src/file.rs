// src/file.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::entry::{ConsolidatedEntry, Entry};
use crate::error::{Error, Result};

// Output shapes are a fixed contract with downstream consumers of the
// original files: tab-separated CSV without quoting, and a single JSON
// object {"entries":[…]} with one record per line inside the array.

const CSV_HEADER: &str = "Work\tPosition\tText\n";
const CSV_HEADER_RAW: &str = "Case\tPlace\tWork\tPosition\tText\n";

/// JSON shape of a consolidated entry: place number omitted, text segments
/// joined into one string.
#[derive(Serialize)]
struct ConsolidatedJson<'a> {
    work: &'a str,
    position: &'a str,
    text: String,
}

pub fn write_consolidated_csv(path: &Path, entries: &[ConsolidatedEntry]) -> Result<()> {
    let mut w = open(path)?;
    w.write_all(CSV_HEADER.as_bytes())?;
    for entry in entries {
        writeln!(
            w,
            "{}\t{}\t{}",
            entry.work(),
            entry.position(),
            entry.joined_text()
        )?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_consolidated_json(path: &Path, entries: &[ConsolidatedEntry]) -> Result<()> {
    let rows: Result<Vec<String>> = entries
        .iter()
        .map(|e| {
            let row = ConsolidatedJson {
                work: e.work(),
                position: e.position(),
                text: e.joined_text(),
            };
            serde_json::to_string(&row).map_err(|e| Error::invalid(e.to_string()))
        })
        .collect();
    write_json_document(path, &rows?)
}

/// One row per case, before consolidation.
pub fn write_entries_csv(path: &Path, entries: &[Entry]) -> Result<()> {
    let mut w = open(path)?;
    w.write_all(CSV_HEADER_RAW.as_bytes())?;
    for entry in entries {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            entry.case_number(),
            entry.place_number(),
            entry.work(),
            entry.position(),
            entry.text()
        )?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_entries_json(path: &Path, entries: &[Entry]) -> Result<()> {
    let rows: Result<Vec<String>> = entries
        .iter()
        .map(|e| serde_json::to_string(e).map_err(|e| Error::invalid(e.to_string())))
        .collect();
    write_json_document(path, &rows?)
}

fn write_json_document(path: &Path, rows: &[String]) -> Result<()> {
    let mut w = open(path)?;
    w.write_all(b"{\"entries\":[\n")?;
    w.write_all(rows.join(",\n").as_bytes())?;
    w.write_all(b"\n]}")?;
    w.flush()?;
    Ok(())
}

fn open(path: &Path) -> Result<BufWriter<File>> {
    if path.as_os_str().is_empty() {
        return Err(Error::invalid("output file cannot be empty"));
    }
    Ok(BufWriter::new(File::create(path)?))
}
