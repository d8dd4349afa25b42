// src/cli.rs
use std::{env, fs, path::PathBuf};

use crate::error::{Error, Result};
use crate::params::Params;
use crate::query::Query;
use crate::runner;

pub fn run() -> Result<()> {
    let params = parse_cli(env::args().skip(1))?;
    let summary = runner::run(&params)?;
    println!("{} cases, {} entries", summary.cases, summary.entries);
    for path in &summary.files_written {
        println!("Written {}", path.display());
    }
    Ok(())
}

fn parse_cli(mut args: impl Iterator<Item = String>) -> Result<Params> {
    let mut params = Params::new();
    let mut positional: Vec<String> = Vec::new();
    let mut queries_file: Option<PathBuf> = None;

    while let Some(a) = args.next() {
        match a.as_str() {
            "-q" | "--queries" => {
                let v = args.next().ok_or_else(|| Error::invalid("missing value for --queries"))?;
                queries_file = Some(PathBuf::from(v));
            }
            "--csv" => {
                let v = args.next().ok_or_else(|| Error::invalid("missing value for --csv"))?;
                params.out_csv = PathBuf::from(v);
            }
            "--json" => {
                let v = args.next().ok_or_else(|| Error::invalid("missing value for --json"))?;
                params.out_json = PathBuf::from(v);
            }
            "--raw" => params.raw = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if a.starts_with('-') && a.len() > 1 => {
                return Err(Error::invalid(format!("unknown arg: {a}")));
            }
            _ => positional.push(a),
        }
    }

    match (positional.is_empty(), queries_file) {
        (false, Some(_)) => {
            return Err(Error::invalid("give either a term or --queries, not both"));
        }
        (false, None) => {
            params.queries.push(Query::parse(&positional.join(" "))?);
        }
        (true, Some(file)) => {
            let text = fs::read_to_string(&file)?;
            for line in text.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                params.queries.push(Query::parse(line)?);
            }
        }
        (true, None) => {
            return Err(Error::invalid("specify a term or --queries <file>; see --help"));
        }
    }

    Ok(params)
}
