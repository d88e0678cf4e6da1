//! Seed the jobs table from a JSON file of postings.
//!
//! The file holds an array of `NewJob` objects in wire naming (camelCase).
//! Each job is inserted with its requirements and duties in one transaction.

use anyhow::{bail, Context, Result};
use clap::Parser;
use job_contract::NewJob;
use jobboard_core::config::Config;
use jobboard_core::domains::jobs::Job;
use sqlx::PgPool;
use std::path::PathBuf;

const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_jobs.json");

#[derive(Parser, Debug)]
#[command(name = "seed_jobs", about = "Insert job postings from a JSON file")]
struct Args {
    /// Path to the JSON seed file
    #[arg(long, conflicts_with = "fixture")]
    file: Option<PathBuf>,

    /// Use the sample postings bundled with the server
    #[arg(long)]
    fixture: bool,

    /// Validate the file without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let path = match (&args.file, args.fixture) {
        (Some(file), _) => file.clone(),
        (None, true) => PathBuf::from(FIXTURE_PATH),
        (None, false) => bail!("Pass --file <path> or --fixture"),
    };

    let json_data = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let jobs: Vec<NewJob> = serde_json::from_str(&json_data).context("Failed to parse seed data")?;

    println!("✓ Loaded {} jobs from {}", jobs.len(), path.display());

    for (idx, job) in jobs.iter().enumerate() {
        job.validate()
            .with_context(|| format!("Job #{} ({}) is incomplete", idx + 1, job.job_title))?;
    }

    if args.dry_run {
        println!("✓ Dry run: all jobs valid, nothing written");
        return Ok(());
    }

    let config = Config::from_env()?;
    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    println!("✓ Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    for (idx, job) in jobs.iter().enumerate() {
        let created = Job::create(job, &pool)
            .await
            .with_context(|| format!("Failed to insert job #{}", idx + 1))?;
        println!(
            "[{}/{}] {} @ {} ({})",
            idx + 1,
            jobs.len(),
            created.job.job_title,
            created.job.company,
            created.job.id
        );
    }

    println!("\n✓ Seeded {} jobs", jobs.len());
    Ok(())
}
