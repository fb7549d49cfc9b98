pub mod abbrev;
pub mod hash_object;
pub mod parse;

use anyhow::Result;
use clap::Subcommand;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Validate object ids and print their canonical form
    Parse(parse::ParseArgs),
    /// Print object ids shortened to the least unambiguous length
    Abbrev(abbrev::AbbrevArgs),
    /// Compute the object id of file contents
    HashObject(hash_object::HashObjectArgs),
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Parse(args) => parse::run(args),
        Commands::Abbrev(args) => abbrev::run(args),
        Commands::HashObject(args) => hash_object::run(args),
    }
}
