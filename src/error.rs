use thiserror::Error;

const FETCH_HINTS: &[&str] = &[
    "Is the 'aws' CLI installed and in your PATH?",
    "Is the specified profile configured for SSO and active (run 'aws sso login')?",
    "Do you have the necessary EC2 permissions and SSM Agent running on the instances?",
];

const SESSION_HINTS: &[&str] = &[
    "The Session Manager plugin is installed for the AWS CLI.",
    "The instance is running and the SSM Agent is healthy.",
    "The instance's IAM role has the necessary SSM permissions (e.g., AmazonSSMManagedInstanceCore).",
];

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("no input received")]
    NoInput,

    #[error("invalid input: '{0}' is not a valid number or 'q'")]
    NotANumber(String),

    #[error("invalid option number: {value}. Must be between 1 and {max}")]
    OutOfRange { value: i64, max: usize },

    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Error executing AWS CLI command: {0:#}")]
    InventoryLaunch(#[source] anyhow::Error),

    #[error("AWS CLI command failed with exit code: {}", display_code(.code))]
    InventoryFailed { code: Option<i32>, stderr: String },

    #[error("Error parsing JSON output from AWS CLI: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Selection Error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Error starting SSM session: {0:#}")]
    SessionLaunch(#[source] anyhow::Error),

    #[error("SSM session terminated with exit code: {}", display_code(.code))]
    SessionFailed { code: Option<i32> },
}

fn display_code(code: &Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "none (terminated by signal)".to_string())
}

impl ConnectError {
    /// Likely root causes to show the operator alongside the error.
    pub fn hints(&self) -> &'static [&'static str] {
        match self {
            ConnectError::InventoryLaunch(_) | ConnectError::InventoryFailed { .. } => FETCH_HINTS,
            ConnectError::SessionLaunch(_) | ConnectError::SessionFailed { .. } => SESSION_HINTS,
            ConnectError::Parse(_) | ConnectError::Selection(_) => &[],
        }
    }

    pub fn hint_heading(&self) -> &'static str {
        match self {
            ConnectError::SessionLaunch(_) | ConnectError::SessionFailed { .. } => "Check if:",
            _ => "Possible issues:",
        }
    }

    /// Diagnostic text emitted by the external tool, if any was captured.
    pub fn tool_output(&self) -> Option<&str> {
        match self {
            ConnectError::InventoryFailed { stderr, .. } if !stderr.is_empty() => Some(stderr.as_str()),
            _ => None,
        }
    }

    /// The failed session's own status is mirrored; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConnectError::SessionFailed { code: Some(code) } if *code != 0 => *code,
            _ => 1,
        }
    }
}
