use clap::Parser;

pub const DEFAULT_URL: &str = "http://localhost/api";

#[derive(Debug, Parser)]
#[command(
    name = "gokapi-cleaner",
    about = "Delete expired files from a Gokapi instance"
)]
pub struct CleanerConfig {
    /// API key for the Gokapi instance
    #[arg(env = "GOKAPI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL for API calls
    #[arg(short, long, env = "GOKAPI_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Don't delete files, just do a test run
    #[arg(short = 't', long = "testrun", visible_alias = "dry-run")]
    pub dry_run: bool,

    /// Increase output verbosity
    #[arg(short, long)]
    pub verbose: bool,
}

impl CleanerConfig {
    /// One-line description of the arguments, safe to log.
    pub fn redacted(&self) -> String {
        format!(
            "api_key=<redacted> url={} dry_run={} verbose={}",
            self.url, self.dry_run, self.verbose
        )
    }
}
