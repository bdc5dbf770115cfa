use std::path::PathBuf;

use clap::Parser;

pub static BIN_NAME: &str = std::env!("CARGO_PKG_NAME");

/// Accounts loaded when no `--accounts` file is given.
pub static DEMO_ACCOUNTS: &str = include_str!("../data/accounts.csv");

#[derive(Debug, Parser)]
#[command(name = "bankist", about = "Replay banking actions against an in-memory set of accounts")]
pub struct Config {
    /// CSV script of actions (`action,user,pin,amount`); read from stdin when omitted
    pub script: Option<PathBuf>,

    /// CSV file of accounts (`owner,pin,interest_rate,movements`) to start from
    #[arg(long, short)]
    pub accounts: Option<PathBuf>,

    /// symbol printed in front of every amount
    #[arg(long, default_value = "£")]
    pub currency: String,

    /// print a CSV summary of every remaining account after the script
    #[arg(long)]
    pub summary: bool,

    /// only print action outcomes, not the screen after each accepted action
    #[arg(long, short)]
    pub quiet: bool,

    /// raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn from_cli() -> Self {
        Self::parse()
    }
}
