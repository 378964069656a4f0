pub mod cidrange;
pub mod getn;
pub mod inrange;
pub mod step;

use clap::{ArgAction, Parser, Subcommand};
use iptools_common::config::{Config, OutputMode};

#[derive(Parser)]
#[command(name = "ipt", version)]
#[command(about = "A small toolbox for IP addresses, ranges and CIDR blocks.")]
pub struct CommandLine {
    /// Print bare values instead of sentences
    #[arg(short, long, global = true)]
    pub short: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check if an IP is in a list of addresses, ranges and CIDR blocks
    #[command(alias = "ir")]
    Inrange {
        ip: String,
        /// e.g. "192.0.2.1 192.0.2.0-192.0.2.10,2001:db8::/64"
        #[arg(required = true, num_args = 1..)]
        ranges: Vec<String>,
    },
    /// Show the first and last address of a CIDR block
    #[command(alias = "cr")]
    Cidrange { cidr: String },
    /// Show the address after an IP
    #[command(alias = "n")]
    Next { ip: String },
    /// Show the address before an IP
    #[command(alias = "p")]
    Prev { ip: String },
    /// List host addresses of a CIDR block
    #[command(alias = "g")]
    Getn {
        cidr: String,
        #[arg(allow_negative_numbers = true)]
        count: i64,
        /// Number of host addresses to skip first
        #[arg(short, long, default_value_t = 0)]
        offset: u64,
        /// Walk down from the broadcast address instead of up from the network address
        #[arg(short, long)]
        tail: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            output: if self.short {
                OutputMode::Short
            } else {
                OutputMode::Descriptive
            },
            color: !self.no_color,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
