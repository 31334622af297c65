use crate::cli::Cli;
use crate::error::ConnectError;
use crate::instance::InstanceRecord;
use crate::output::{print_debug, print_info, print_success, print_warning};
use crate::runner::{Invocation, ProcessRunner, Stdio};
use chrono::{DateTime, Local};
use colored::*;
use std::time::{Duration, Instant};

pub const SESSION_COMPLETED: &str = "SSM session completed";

#[derive(Debug)]
pub struct SessionSummary {
    pub instance: InstanceRecord,
    pub started_at: DateTime<Local>,
    pub duration: Duration,
    pub profile: Option<String>,
    pub region: Option<String>,
}

pub fn start_session_invocation(instance_id: &str, cli: &Cli) -> Invocation {
    Invocation::new("aws")
        .args(["ssm", "start-session"])
        .arg("--target")
        .arg(instance_id)
        .args(cli.context_args())
}

/// Hands the terminal to `aws ssm start-session` and blocks until the
/// session ends.
pub fn start_ssm_session(
    runner: &dyn ProcessRunner,
    instance: &InstanceRecord,
    cli: &Cli,
) -> Result<SessionSummary, ConnectError> {
    print_info(&format!(
        "Attempting to start SSM session for Instance ID: {}...",
        instance.instance_id.green()
    ));

    if !atty::is(atty::Stream::Stdin) {
        print_warning("stdin is not a terminal; the session will not be interactive.");
    }

    let invocation = start_session_invocation(&instance.instance_id, cli);
    print_debug(&format!("Running: {}", invocation), cli.verbose);

    let started_at = Local::now();
    let start_instant = Instant::now();

    let outcome = runner
        .run(&invocation, Stdio::Inherit)
        .map_err(ConnectError::SessionLaunch)?;

    if !outcome.success() {
        return Err(ConnectError::SessionFailed { code: outcome.code });
    }

    print_success(SESSION_COMPLETED);

    Ok(SessionSummary {
        instance: instance.clone(),
        started_at,
        duration: start_instant.elapsed(),
        profile: cli.profile.clone(),
        region: cli.region.clone(),
    })
}

pub fn print_session_summary(summary: &SessionSummary) {
    eprintln!();

    let border = "━".repeat(75).blue();
    eprintln!("{}", border);
    eprintln!("{}", "SESSION SUMMARY".green().bold());
    eprintln!("{}", border);

    eprintln!("{}", "Instance Details:".yellow().bold());
    eprintln!("  • Instance ID: {}", summary.instance.instance_id.green());
    eprintln!("  • Name: {}", summary.instance.display_name());
    eprintln!("  • Private IP: {}", summary.instance.display_private_ip());

    eprintln!("{}", "Connection Details:".yellow().bold());
    eprintln!(
        "  • Started: {}",
        summary.started_at.format("%Y-%m-%d %H:%M:%S")
    );
    eprintln!(
        "  • Duration: {}",
        format_duration(summary.duration).green()
    );
    eprintln!(
        "  • Profile: {}",
        summary.profile.as_deref().unwrap_or("default")
    );
    eprintln!(
        "  • Region: {}",
        summary.region.as_deref().unwrap_or("default")
    );
    eprintln!("{}", border);
}

pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
