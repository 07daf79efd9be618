//! CLI commands
//!
//! Defines the CLI commands and their handlers. The `retrieve` command runs
//! the full poll-until-ready operation; `status` is a single status check
//! with no polling.

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::config::Config;
use stitch_client::{PollerConfig, StitchClient, StitchJob, StitchJobPoller};

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Stitch a patient's record and wait for the download locator
    Retrieve {
        /// Patient identifier (NHS number)
        patient_id: String,
    },
    /// Check the current stitch job status for a patient, without polling
    Status {
        /// Patient identifier (NHS number)
        patient_id: String,
    },
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = StitchClient::new(&config.base_url, config.auth_headers()?);

    match command {
        Commands::Retrieve { patient_id } => retrieve_record(client, config, &patient_id).await,
        Commands::Status { patient_id } => check_status(client, &patient_id).await,
    }
}

/// Run a stitch job to completion and print the result
async fn retrieve_record(client: StitchClient, config: &Config, patient_id: &str) -> Result<()> {
    let poller_config = PollerConfig {
        poll_delay: config.poll_delay,
        max_pending_polls: config.max_pending_polls,
    };
    poller_config.validate()?;

    let poller = StitchJobPoller::new(client, poller_config);

    match poller.retrieve(patient_id).await {
        Ok(job) => {
            print_job(&job);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format!("Record view unavailable: {e}").red());
            std::process::exit(1);
        }
    }
}

/// Single status check, no polling
async fn check_status(client: StitchClient, patient_id: &str) -> Result<()> {
    let response = client.get_stitch_job(patient_id).await?;

    println!(
        "{} {}",
        "Job status:".bold(),
        response.job_status.yellow()
    );

    Ok(())
}

/// Print a completed stitch job
fn print_job(job: &StitchJob) {
    println!("{}", "Record ready.".green().bold());
    println!("  {} {}", "Patient:".bold(), job.patient_id);
    println!("  {} {}", "Status:".bold(), job.status);

    if let Some(files) = job.number_of_files {
        println!("  {} {}", "Files:".bold(), files);
    }
    if let Some(bytes) = job.total_file_size_in_bytes {
        println!("  {} {} bytes", "Total size:".bold(), bytes);
    }
    if let Some(updated) = &job.last_updated {
        println!("  {} {}", "Last updated:".bold(), updated);
    }

    println!("  {} {}", "Download:".bold(), job.presigned_url);
}
