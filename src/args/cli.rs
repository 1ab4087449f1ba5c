use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Smoke-test a Gerby tag site by fetching a random sample of its tag pages."
)]
pub struct TesterArgs {
    /// Path to a TOML file describing what to test
    pub config_path: String,

    /// Be verbose
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Be quiet
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
