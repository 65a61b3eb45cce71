//! tunjangan - fuzzy allowance calculator
//!
//! Reads employee records, computes each allowance with the Mamdani
//! inference core and prints the `id, nama, tunjangan` table.

mod io;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tunjangan_config::Settings;
use tunjangan_core::{evaluate_batch, AllowanceEngine, ApplicantProfile, EmployeeRecord};

use crate::io::{CurveDocument, RecordFormat};

#[derive(Parser)]
#[command(name = "tunjangan", version, about = "Fuzzy allowance calculator")]
struct Cli {
    /// Config file (defaults to ./tunjangan.{toml,yaml} when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overrides the configured one (RUST_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    age: f64,
    #[arg(long)]
    tenure: f64,
    #[arg(long)]
    salary: f64,
}

impl ProfileArgs {
    fn profile(&self) -> ApplicantProfile {
        ApplicantProfile::new(self.age, self.tenure, self.salary)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the allowance for one applicant
    Compute {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Compute allowances for a file of employee records
    Batch {
        input: PathBuf,
        #[arg(long, value_enum)]
        format: Option<RecordFormat>,
        /// Write the rows as JSON instead of printing the table
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Export membership curves and the defuzzified point as JSON
    Curves {
        #[command(flatten)]
        profile: ProfileArgs,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the effective settings as TOML
    Settings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    logging::init(&settings.logging, cli.log_level.as_deref());

    let engine = settings.engine()?;
    tracing::info!(
        rules = engine.rule_base().len(),
        resolution = engine.discretization().resolution(),
        "allowance engine ready"
    );

    match cli.cmd {
        Some(Commands::Compute { profile }) => {
            let allowance = engine.compute(&profile.profile())?;
            println!("{:.2}", allowance);
        },
        Some(Commands::Batch {
            input,
            format,
            output,
        }) => {
            let records = io::read_records(&input, format)?;
            run_batch(&engine, &settings, &records, output)?;
        },
        Some(Commands::Curves { profile, output }) => {
            let inference = engine.infer(&profile.profile())?;
            let document = CurveDocument::from_inference(&inference);
            let json = serde_json::to_string_pretty(&document)?;
            io::emit(&json, output.as_deref())?;
        },
        Some(Commands::Settings) => {
            print!("{}", settings.to_toml()?);
        },
        None => {
            let demo = vec![EmployeeRecord::new(1, "Ali", 30.0, 6.0, 750_000.0)];
            run_batch(&engine, &settings, &demo, None)?;
        },
    }

    Ok(())
}

fn run_batch(
    engine: &AllowanceEngine,
    settings: &Settings,
    records: &[EmployeeRecord],
    output: Option<PathBuf>,
) -> Result<()> {
    let mut rows = Vec::with_capacity(records.len());
    for result in evaluate_batch(engine, records, settings.batch.parallel) {
        match result {
            Ok(row) => rows.push(row),
            Err(err) => tracing::error!(record_id = err.record_id, error = %err.source, "skipping record"),
        }
    }

    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&rows)?;
            io::emit(&json, Some(&path))?;
            tracing::info!(rows = rows.len(), path = %path.display(), "wrote allowance rows");
        },
        None => print!("{}", io::render_table(&rows)),
    }
    Ok(())
}
