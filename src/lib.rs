// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod core;

pub mod crawl;
pub mod entry;
pub mod error;
pub mod file;
pub mod params;
pub mod protocol;
pub mod query;
pub mod runner;
pub mod store;
