//! pagesim CLI - replay a reference string under FIFO, LRU and Optimal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pagesim::adapter::{
    clamp_frames, parse_stream, random_workload, render_json, render_steps, render_summary,
    resolve_input, InputRequest, InputSource, LastInput,
};
use pagesim::common::config::STATE_FILE_NAME;
use pagesim::sim::{Lookahead, PolicyKind, Runner};

/// Page replacement simulator
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reference string, numbers separated by spaces or commas
    #[arg(allow_hyphen_values = true, conflicts_with = "random")]
    references: Option<String>,

    /// Number of frames (clamped to 1..=50)
    #[arg(short, long, allow_negative_numbers = true)]
    frames: Option<i64>,

    /// Policy to run: fifo, lru or optimal. Repeatable; defaults to all three
    #[arg(short, long = "policy")]
    policies: Vec<PolicyKind>,

    /// Generate a random reference string and frame count
    #[arg(short, long)]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Print the step-by-step frame table of each policy
    #[arg(short, long)]
    steps: bool,

    /// Print the full results as JSON
    #[arg(long, conflicts_with = "steps")]
    json: bool,

    /// File that remembers the last input
    #[arg(long, default_value = STATE_FILE_NAME)]
    state: PathBuf,

    /// Neither restore nor save the last input
    #[arg(long)]
    no_state: bool,

    /// Rescan the stream on every Optimal decision instead of precomputing
    #[arg(long)]
    naive_lookahead: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let random = args.random.then(|| {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        random_workload(&mut rng)
    });
    let input = resolve_input(&InputRequest {
        references: args.references.as_deref(),
        frames: args.frames,
        random,
        state: (!args.no_state).then_some(args.state.as_path()),
    });
    match input.source {
        InputSource::Random => log::info!("Random sequence generated"),
        InputSource::Saved => log::info!("Restored last input from {}", args.state.display()),
        InputSource::Arguments | InputSource::Demo => {}
    }

    let text = input.references;
    let stream = parse_stream(&text).context(
        "Please enter a reference string (numbers separated by spaces/commas)",
    )?;
    let frames = clamp_frames(input.frames);

    let parsed = format!("Parsed {} references • Frames = {}", stream.len(), frames);
    if args.json {
        log::info!("{}", parsed);
    } else {
        println!("{}\n", parsed);
    }

    let policies = if args.policies.is_empty() {
        PolicyKind::ALL.to_vec()
    } else {
        args.policies.clone()
    };
    let lookahead = if args.naive_lookahead {
        Lookahead::Scan
    } else {
        Lookahead::Table
    };

    let comparison = Runner::new(stream.as_slice(), frames)?
        .with_lookahead(lookahead)
        .run_parallel(&policies)?;
    for result in comparison.iter() {
        log::debug!("{}", result);
    }

    if args.json {
        println!("{}", render_json(&comparison)?);
    } else {
        print!("{}", render_summary(&comparison));
        if let Some(best) = comparison.best() {
            println!("\nFewest faults: {}", best);
        }
        if args.steps {
            println!();
            print!("{}", render_steps(&comparison));
        }
    }

    if !args.no_state {
        LastInput::new(text, frames)
            .save(&args.state)
            .with_context(|| format!("Failed to save last input to {}", args.state.display()))?;
    }

    Ok(())
}
