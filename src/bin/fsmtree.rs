use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context as _};
use clap::Parser;
use fsmtree::Parsed;
use miette::GraphicalReportHandler;

/// Read a state hierarchy description and print the parsed model.
#[derive(Parser)]
struct Args {
    /// Input file to parse.
    /// If `-` or not supplied, read from stdin.
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let Args { file } = Args::parse();
    let input = match file {
        Some(path) if path == Path::new("-") => get_stdin()?,
        Some(path) => std::fs::read_to_string(path).context("error reading file")?,
        None => get_stdin()?,
    };
    let Parsed { states, errors } = fsmtree::parse(&input);
    for state in &states {
        println!("{state}");
    }
    if !errors.is_empty() {
        let handler = GraphicalReportHandler::new();
        let mut rendered = String::new();
        for error in &errors {
            handler.render_report(&mut rendered, error).unwrap();
        }
        bail!("\n{}", rendered);
    }
    Ok(())
}

fn get_stdin() -> anyhow::Result<String> {
    let mut s = String::new();
    std::io::stdin()
        .read_to_string(&mut s)
        .context("error reading from stdin")?;
    Ok(s)
}
