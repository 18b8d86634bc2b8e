//! wordcmp CLI: write the words two lists have in common, sorted by initial.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use wordcmp_core::config::{ConfigDoc, PipelineConfig};
use wordcmp_exec::{Pipeline, RunReport};

#[derive(Parser, Debug, Default)]
#[command(name = "wordcmp")]
#[command(about = "Intersect two word lists and write the matches grouped by initial letter", long_about = None)]
struct Cli {
    /// Reference word list (default: f1.txt)
    #[arg(long)]
    source: Option<String>,

    /// Word list checked against the reference (default: f2.txt)
    #[arg(long)]
    filter: Option<String>,

    /// Output file, overwritten (default: out.txt)
    #[arg(long)]
    output: Option<String>,

    /// YAML file with `source`, `filter` and `output` keys
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let report = Pipeline::with_fs(config).run();
    print_report(&report, cli.json);
    // Stage failures are diagnostics only; the exit status stays 0.
}

/// Defaults, then environment, then the YAML file, then flags.
fn resolve_config(cli: &Cli) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
    let mut config = PipelineConfig::from_env();
    if let Some(path) = &cli.config {
        let yaml = fs::read_to_string(path)
            .map_err(|e| format!("cannot read config '{}': {}", path.display(), e))?;
        config.apply_doc(&ConfigDoc::from_yaml_str(&yaml)?);
    }
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut PipelineConfig, cli: &Cli) {
    if let Some(source) = &cli.source {
        config.source_path = source.clone();
    }
    if let Some(filter) = &cli.filter {
        config.filter_path = filter.clone();
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }
}

fn print_report(report: &RunReport, json: bool) {
    for failure in &report.failures {
        eprintln!("{}", failure.message);
    }
    if json {
        match report.to_json_pretty() {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
