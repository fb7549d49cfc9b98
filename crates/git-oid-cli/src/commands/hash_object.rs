use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Args;
use git_oid::hasher::Hasher;

#[derive(Args)]
pub struct HashObjectArgs {
    /// Read the object from stdin
    #[arg(long)]
    stdin: bool,

    /// Object type (default: blob)
    #[arg(short = 't', default_value = "blob")]
    obj_type: String,

    /// Files to hash
    #[arg(value_name = "file")]
    files: Vec<String>,
}

pub fn run(args: &HashObjectArgs) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.stdin {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        let oid = Hasher::hash_object(&args.obj_type, &data)?;
        writeln!(out, "{oid}")?;
    }

    for file in &args.files {
        let data = std::fs::read(file).with_context(|| format!("could not open '{file}' for reading"))?;
        let oid = Hasher::hash_object(&args.obj_type, &data)?;
        writeln!(out, "{oid}")?;
    }

    Ok(0)
}
