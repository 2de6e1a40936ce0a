//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod find;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report apps whose package was last uploaded before a cutoff
    Find(find::FindArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Find(args) => find::run(ctx, args),
    }
}
