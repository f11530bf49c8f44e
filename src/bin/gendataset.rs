use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use magicnumber::generator;

/// Prints out a JSON dataset with its magic numbers count, for performance tests
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Number of elements
    #[clap(short = 'n', default_value_t = 10000)]
    elements: usize,

    /// Minimum value for an element bound
    #[clap(short = 'a', default_value_t = 0, allow_negative_numbers(true))]
    min_el: i64,

    /// Maximum value for an element bound
    #[clap(short = 'b', default_value_t = 10000, allow_negative_numbers(true))]
    max_el: i64,

    /// Seed for a reproducible dataset
    #[clap(long, env = "GENDATASET_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let generated = generator::generate(&mut rng, args.elements, args.min_el, args.max_el)?;
    serde_json::to_writer(std::io::stdout().lock(), &generated)?;
    println!();
    Ok(())
}
