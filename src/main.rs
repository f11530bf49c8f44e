// Magic number counter, counts squares of primes over integer ranges.
// Copyright (C) 2024 Subsquid Labs GmbH

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use magicnumber::counter;

use crate::cli::{Args, Source};

mod cli;

fn setup_tracing(args: &Args) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or("info".to_string()),
    );
    let fmt = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_span_events(if args.log_span_durations {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        })
        .with_filter(env_filter);
    tracing_subscriber::registry().with(fmt).try_init()?;
    Ok(())
}

fn run(args: &Args) -> Result<Option<u64>> {
    let stdin = if args.reads_stdin(std::io::stdin().is_terminal()) {
        Some(std::io::read_to_string(std::io::stdin()).context("Couldn't read stdin")?)
    } else {
        None
    };
    let Some(source) = args.source(stdin) else {
        tracing::debug!("No dataset given");
        return Ok(None);
    };
    tracing::debug!(?source, "Counting magic numbers");
    let result = match source {
        Source::Stdin(content) => counter::count_from_json(&content)
            .context("Couldn't count magic numbers from stdin")?,
        Source::Json(json) => counter::count_from_json(&json)?,
        Source::File(path) => counter::count_from_file(&path)
            .with_context(|| format!("Couldn't count magic numbers in '{path}'"))?,
    };
    Ok(result)
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    setup_tracing(&args)?;

    if let Some(magic_numbers) = run(&args)? {
        println!("{magic_numbers}");
    }
    Ok(())
}
