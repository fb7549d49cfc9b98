use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use git_oid::ObjectId;

#[derive(Args)]
pub struct ParseArgs {
    /// Print the loose object path (`xx/xxxx...`) instead of the id
    #[arg(long)]
    path: bool,

    /// Object ids as 40 hex digits
    #[arg(value_name = "oid", required = true)]
    oids: Vec<String>,
}

pub fn run(args: &ParseArgs) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for text in &args.oids {
        let oid = ObjectId::from_hex(text)
            .with_context(|| format!("not a valid object name: '{text}'"))?;
        if args.path {
            let mut path = [0u8; git_oid::PATH_SIZE];
            oid.write_path(&mut path);
            out.write_all(&path)?;
            out.write_all(b"\n")?;
        } else {
            writeln!(out, "{oid}")?;
        }
    }

    Ok(0)
}
