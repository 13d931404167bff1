use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use word_chain_core::text;
use word_chain_core::{Chain, GenerateOptions};

/// Learns word transitions from a text and prints a generated sequence.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input text file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Maximum number of words to generate
    #[arg(short = 'n', long, default_value_t = 100)]
    length: usize,

    /// Word to start from (random when omitted)
    #[arg(short, long)]
    start: Option<String>,

    /// Stop at the first word without continuation instead of restarting
    #[arg(long)]
    no_restart: bool,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn read_input(input: Option<&PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Train on every word of the input, line breaks included
    let contents = read_input(args.input.as_ref())?;
    let mut chain = Chain::from_text(&contents);
    info!("Learned {} source words", chain.table().len());

    let mut options = GenerateOptions::new(args.length)?.with_restart(!args.no_restart);
    options.start = args.start;

    // A fixed seed gives the same sequence for the same input
    let tokens = match args.seed {
        Some(seed) => chain.generate_with(&options, &mut StdRng::seed_from_u64(seed))?,
        None => chain.generate(&options)?,
    };

    println!("{}", text::join(&tokens));
    Ok(())
}
