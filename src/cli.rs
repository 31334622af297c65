use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "aws-ssm-picker")]
#[command(about = "List EC2 instances and open an SSM session to the one you pick")]
#[command(version)]
pub struct Cli {
    /// AWS profile to use (defaults to the active environment or default profile)
    #[arg(short = 'p', long = "profile")]
    pub profile: Option<String>,

    /// AWS region to use (defaults to AWS_REGION env var or config file)
    #[arg(short = 'r', long = "region")]
    pub region: Option<String>,

    /// Hide connection summary after session ends
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Arguments appended to every `aws` invocation to select the
    /// credential context.
    pub fn context_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(profile) = self.profile.as_ref() {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }

        if let Some(region) = self.region.as_ref() {
            args.push("--region".to_string());
            args.push(region.clone());
        }

        args
    }
}
