use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use git_oid::{ObjectId, Shortener, ShortenerOptions, DEFAULT_SHORTENER_CAPACITY, HEX_SIZE, MIN_PREFIX_LEN};
use tracing::debug;

#[derive(Args)]
pub struct AbbrevArgs {
    /// Never abbreviate to fewer than this many hex digits
    #[arg(long, default_value_t = MIN_PREFIX_LEN)]
    min_length: usize,

    /// Maximum number of distinct ids to accept
    #[arg(long, default_value_t = DEFAULT_SHORTENER_CAPACITY)]
    capacity: usize,

    /// Print only the computed length
    #[arg(long)]
    length_only: bool,

    /// Object ids; read from stdin, one per line, when none are given.
    /// Surrounding whitespace is ignored; text after the leading 40 digits
    /// of a line is kept as is.
    #[arg(value_name = "oid")]
    oids: Vec<String>,
}

pub fn run(args: &AbbrevArgs) -> Result<i32> {
    let lines: Vec<String> = if args.oids.is_empty() {
        io::stdin().lock().lines().collect::<io::Result<_>>()?
    } else {
        args.oids.clone()
    };

    let mut shortener = Shortener::with_options(ShortenerOptions {
        min_length: args.min_length,
        capacity: args.capacity,
    })?;

    // Nothing can be printed until every id is in, since later ids may
    // lengthen the abbreviation of earlier ones.
    let mut entries: Vec<(ObjectId, &str)> = Vec::with_capacity(lines.len());
    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        let oid = ObjectId::from_hex_bytes(line.as_bytes())
            .with_context(|| format!("not a valid object name: '{line}'"))?;
        shortener.add_oid(&oid)?;
        entries.push((oid, line.get(HEX_SIZE..).unwrap_or_default()));
    }

    debug!(
        ids = shortener.len(),
        length = shortener.min_length(),
        "abbreviation computed"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.length_only {
        writeln!(out, "{}", shortener.min_length())?;
        return Ok(0);
    }

    for (oid, rest) in &entries {
        writeln!(out, "{}{}", shortener.abbreviate(oid), rest)?;
    }

    Ok(0)
}
