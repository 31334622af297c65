use crate::cli::Cli;
use crate::error::ConnectError;
use crate::output::{print_debug, print_info};
use crate::runner::{Invocation, ProcessRunner, Stdio};

/// JMESPath projection flattening each reservation's instances into
/// `{InstanceId, Name, PrivateIpAddress}` objects.
pub const INSTANCE_QUERY: &str = "Reservations[*].Instances[*].{InstanceId:InstanceId,Name:Tags[?Key==`Name`].Value | [0],PrivateIpAddress:PrivateIpAddress}";

pub fn describe_instances_invocation(cli: &Cli) -> Invocation {
    Invocation::new("aws")
        .args(["ec2", "describe-instances"])
        .args(["--query", INSTANCE_QUERY])
        .args(["--output", "json"])
        .args(cli.context_args())
}

pub fn profile_message(cli: &Cli) -> String {
    match cli.profile.as_deref() {
        Some(profile) => format!("Using AWS Profile: {}", profile),
        None => "No profile specified. Using the default profile/active environment.".to_string(),
    }
}

/// Runs `aws ec2 describe-instances` and returns its raw JSON output.
pub fn fetch_instances(runner: &dyn ProcessRunner, cli: &Cli) -> Result<Vec<u8>, ConnectError> {
    print_info(&profile_message(cli));

    let invocation = describe_instances_invocation(cli);
    print_debug(&format!("Running: {}", invocation), cli.verbose);

    let outcome = runner
        .run(&invocation, Stdio::Capture)
        .map_err(ConnectError::InventoryLaunch)?;

    if !outcome.success() {
        return Err(ConnectError::InventoryFailed {
            code: outcome.code,
            stderr: outcome.stderr_text(),
        });
    }

    print_debug(
        &format!("Received {} bytes from describe-instances", outcome.stdout.len()),
        cli.verbose,
    );

    Ok(outcome.stdout)
}
