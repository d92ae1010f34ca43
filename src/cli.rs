use clap::Parser;

/// Look up a CVE in the NVD and print its key fields as a table
#[derive(Parser, Debug)]
#[command(name = "cve-lookup")]
#[command(version)]
#[command(about = "Look up a CVE in the NVD and print its key fields as a table", long_about = None)]
pub struct Args {
    /// CVE identifier, with or without the "CVE-" prefix (e.g. 2021-34527)
    #[arg(value_name = "CVE-ID")]
    pub identifier: String,

    /// Print the raw JSON response before the table
    #[arg(short, long)]
    pub verbose: bool,

    /// Base URL of the NVD single-record API
    #[arg(long, value_name = "URL", hide = true)]
    pub api_url: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
