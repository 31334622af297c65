mod app;
mod cli;
mod error;
mod instance;
mod inventory;
mod output;
mod runner;
mod selector;
mod session;

use app::Outcome;
use clap::Parser;
use cli::Cli;
use error::ConnectError;
use output::{print_debug, print_error, print_hints, print_info};
use runner::SystemRunner;
use session::print_session_summary;
use std::io;

fn report_error(err: &ConnectError) {
    eprintln!();
    print_error(&err.to_string());

    if let Some(tool_output) = err.tool_output() {
        eprintln!("AWS CLI Error Output:\n{}", tool_output);
    }

    print_hints(err.hint_heading(), err.hints());
}

fn main() {
    let cli = Cli::parse();

    print_debug("AWS EC2 Instance Lister (Interactive Selection)", cli.verbose);
    print_debug(
        &format!("Profile: {}", cli.profile.as_deref().unwrap_or("default")),
        cli.verbose,
    );
    print_debug(
        &format!(
            "Region: {}",
            cli.region.as_deref().unwrap_or("default (from config)")
        ),
        cli.verbose,
    );

    // The locked stdin buffers ahead of the selection line; anything typed
    // past it before the session starts is not forwarded to the session.
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = app::run(&cli, &SystemRunner, &mut stdin.lock(), &mut stdout.lock());

    match result {
        Ok(Outcome::NoInstances) => {
            eprintln!();
            print_info("No EC2 instances found.");
        }
        Ok(Outcome::Cancelled) => {
            eprintln!();
            print_info("Exiting program.");
        }
        Ok(Outcome::SessionEnded(summary)) => {
            if !cli.no_summary {
                print_session_summary(&summary);
            }
        }
        Err(err) => {
            report_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
