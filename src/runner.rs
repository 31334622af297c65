use anyhow::{Context, Result};
use signal_hook::consts::SIGINT;
use std::fmt;
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// A single external command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stdio {
    /// stdout and stderr are collected, stdin is closed.
    Capture,
    /// All three streams are handed to the operator's terminal.
    Inherit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// `None` when the child was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim_end().to_string()
    }
}

/// Runs external commands. Errors are reserved for commands that could not
/// be started at all; a non-zero exit is reported through the outcome.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation, stdio: Stdio) -> Result<ProcessOutcome>;
}

static SIGINT_DEFAULT: OnceLock<Arc<AtomicBool>> = OnceLock::new();
static INHERITED_CHILDREN: Mutex<usize> = Mutex::new(0);

/// Keeps Ctrl-C from terminating this process while a child owns the
/// terminal. The child still receives SIGINT from the foreground process
/// group. Once the last guard drops, SIGINT terminates again.
struct InterruptGuard;

impl InterruptGuard {
    fn install() -> Result<Self> {
        let mut depth = INHERITED_CHILDREN
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let terminate = match SIGINT_DEFAULT.get() {
            Some(flag) => flag,
            None => {
                let flag = Arc::new(AtomicBool::new(true));
                signal_hook::flag::register_conditional_default(SIGINT, Arc::clone(&flag))
                    .context("Failed to install SIGINT handler")?;
                SIGINT_DEFAULT.get_or_init(|| flag)
            }
        };

        terminate.store(false, Ordering::SeqCst);
        *depth += 1;
        Ok(Self)
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        let mut depth = INHERITED_CHILDREN
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        *depth -= 1;
        if *depth == 0 {
            if let Some(terminate) = SIGINT_DEFAULT.get() {
                terminate.store(true, Ordering::SeqCst);
            }
        }
    }
}

/// Spawns real processes through `std::process::Command`.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation, stdio: Stdio) -> Result<ProcessOutcome> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);

        match stdio {
            Stdio::Capture => {
                let output = cmd
                    .stdin(std::process::Stdio::null())
                    .output()
                    .with_context(|| format!("Failed to launch '{}'", invocation.program))?;

                Ok(ProcessOutcome {
                    code: output.status.code(),
                    stdout: output.stdout,
                    stderr: output.stderr,
                })
            }
            Stdio::Inherit => {
                let _interrupts = InterruptGuard::install()?;
                let status = cmd
                    .stdin(std::process::Stdio::inherit())
                    .stdout(std::process::Stdio::inherit())
                    .stderr(std::process::Stdio::inherit())
                    .status()
                    .with_context(|| format!("Failed to launch '{}'", invocation.program))?;

                Ok(ProcessOutcome {
                    code: status.code(),
                    ..Default::default()
                })
            }
        }
    }
}
