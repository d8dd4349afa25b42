// src/params.rs
use std::path::PathBuf;

use crate::query::Query;

pub const ENDPOINT: &str = "https://www.corpusthomisticum.org/it/index.age";

pub const DEFAULT_OUT_CSV: &str = "entries.csv";
pub const DEFAULT_OUT_JSON: &str = "entries.json";

#[derive(Clone)]
pub struct Params {
    pub queries: Vec<Query>,   // one entry per query line
    pub out_csv: PathBuf,      // CSV output path
    pub out_json: PathBuf,     // JSON output path
    pub raw: bool,             // one row per case instead of consolidated
    pub endpoint: String,      // overridable for tests
}

impl Params {
    pub fn new() -> Self {
        Self {
            queries: Vec::new(),
            out_csv: PathBuf::from(DEFAULT_OUT_CSV),
            out_json: PathBuf::from(DEFAULT_OUT_JSON),
            raw: false,
            endpoint: s!(ENDPOINT),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
