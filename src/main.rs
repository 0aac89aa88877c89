//! Mamushi CLI - Python Expression Lowering
//!
//! Author: Tane Channel Technology

use anyhow::Result;
use clap::Parser;
use mamushi::ast::SourceText;
use mamushi::{lower_expression, RecordTable};
use std::path::PathBuf;

/// Mamushi - lower Python expression trees to graph nodes
#[derive(Parser, Debug)]
#[command(name = "mms")]
#[command(author = "Tane Channel Technology")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lower a serialized Python expression tree to its graph form", long_about = None)]
struct Cli {
    /// Input expression tree (JSON)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Original Python source, for code snippets and locations
    #[arg(short, long, value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Record (class) names to seed the symbol table with
    #[arg(short, long, value_name = "NAME")]
    record: Vec<String>,

    /// Emit the graph as JSON instead of the debug dump
    #[arg(long)]
    json: bool,

    /// Check only (don't print the graph); exit 1 on error diagnostics
    #[arg(short, long)]
    check: bool,

    /// Emit JSON diagnostics to stderr
    #[arg(long)]
    diag_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tree = mamushi::load_tree(&cli.input)?;

    let source = match &cli.source {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            SourceText::with_file(text, path.display().to_string())
        }
        None => SourceText::empty(),
    };

    let mut records = RecordTable::new();
    for name in &cli.record {
        records.define(name);
    }

    let (graph, diags) = lower_expression(&tree, &source, &records);

    if cli.diag_json {
        eprintln!("{}", diags.to_json());
    } else if diags.has_errors() {
        eprint!("{}", diags.to_text());
    }

    if cli.check {
        if diags.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&graph)?);
    } else {
        println!("=== Lowered graph ===");
        println!("{graph:#?}");
    }

    Ok(())
}
