use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Command line surface: exactly one way of naming targets must be given.
///
/// clap enforces the exclusivity, so by the time parsing succeeds exactly
/// one of `subnet` / `rhosts` is populated.
#[derive(Parser, Debug)]
#[command(name = "bmchunt")]
#[command(about = "Hunts for exposed SuperMicro BMC web login pages.")]
#[command(group(ArgGroup::new("targets").required(true).args(["subnet", "rhosts"])))]
pub struct CommandLine {
    /// Subnet to sweep, in CIDR notation (e.g. 192.168.1.0/24)
    #[arg(long, value_name = "CIDR")]
    pub subnet: Option<String>,

    /// File containing one IPv4 address or hostname per line
    #[arg(long, value_name = "FILE")]
    pub rhosts: Option<PathBuf>,
}
