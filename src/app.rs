use crate::cli::Cli;
use crate::error::ConnectError;
use crate::instance::normalize;
use crate::inventory::fetch_instances;
use crate::output::print_debug;
use crate::runner::ProcessRunner;
use crate::selector::{prompt_for_selection, Selection};
use crate::session::{start_ssm_session, SessionSummary};
use std::io::{BufRead, Write};

#[derive(Debug)]
pub enum Outcome {
    NoInstances,
    Cancelled,
    SessionEnded(SessionSummary),
}

/// fetch → normalize → select-or-quit → launch. Nothing is retried.
pub fn run<R, W>(
    cli: &Cli,
    runner: &dyn ProcessRunner,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome, ConnectError>
where
    R: BufRead,
    W: Write,
{
    let payload = fetch_instances(runner, cli)?;
    let instances = normalize(&payload)?;

    print_debug(&format!("Found {} instance(s)", instances.len()), cli.verbose);

    if instances.is_empty() {
        return Ok(Outcome::NoInstances);
    }

    let selected = match prompt_for_selection(input, out, &instances)? {
        Selection::Cancelled => return Ok(Outcome::Cancelled),
        Selection::Chosen(instance) => instance,
    };

    print_debug(
        &format!(
            "Selected {} ({})",
            selected.instance_id,
            selected.display_name()
        ),
        cli.verbose,
    );

    let summary = start_ssm_session(runner, selected, cli)?;
    Ok(Outcome::SessionEnded(summary))
}
