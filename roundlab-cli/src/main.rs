//! RoundLab CLI — synthetic round-stream simulation.
//!
//! Commands:
//! - `simulate` — feed a seeded synthetic outcome stream through the engine
//!   and report accuracy, health, and defensive-mode statistics

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use roundlab_core::domain::{
    CycleMemory, Health, History, OutcomeRecord, Resolution, RoundId, RAW_OUTCOME_MAX,
};
use roundlab_core::engine::{Engine, EngineConfig};

#[derive(Parser)]
#[command(
    name = "roundlab",
    about = "RoundLab CLI — sequential outcome prediction engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a synthetic outcome stream through the engine and report stats.
    Simulate {
        /// Number of rounds to stream.
        #[arg(long, default_value_t = 1000)]
        rounds: u64,

        /// Master seed for both the engine and the synthetic stream.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Path to a TOML engine config. Overrides --seed when it sets one.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit one JSON decision per line instead of the final summary.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            rounds,
            seed,
            config,
            json,
        } => run_simulate(rounds, seed, config, json),
    }
}

struct SimStats {
    cycles: u64,
    fallback_cycles: u64,
    defensive_cycles: u64,
    confident_cycles: u64,
}

fn run_simulate(rounds: u64, seed: u64, config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EngineConfig::from_toml_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EngineConfig {
            master_seed: seed,
            ..Default::default()
        },
    };

    let mut engine = Engine::new(config);
    // The outcome stream draws from its own rng so changing the engine seed
    // never changes the inputs it is judged on.
    let mut stream = StdRng::seed_from_u64(seed.wrapping_add(0x726f756e64));

    let mut history = History::new();
    let mut memory = CycleMemory::default();
    let mut round = RoundId::new("1").expect("literal round id");
    let mut stats = SimStats {
        cycles: 0,
        fallback_cycles: 0,
        defensive_cycles: 0,
        confident_cycles: 0,
    };

    for _ in 0..rounds {
        let raw: u8 = stream.gen_range(0..=RAW_OUTCOME_MAX);
        let record = OutcomeRecord::new(round.clone(), raw)
            .with_context(|| format!("constructing round {round}"))?;
        history.push(record);

        memory.long_term_global_accuracy = accuracy_of(&history);
        let decision = engine.run_cycle(&mut history, &mut memory);

        stats.cycles += 1;
        match decision.health {
            Health::InsufficientHistory | Health::ModelUncertain => stats.fallback_cycles += 1,
            Health::DefensiveMode => stats.defensive_cycles += 1,
            Health::Ok => {}
        }
        if decision.confidence_level == 1 {
            stats.confident_cycles += 1;
        }

        if json {
            println!("{}", serde_json::to_string(&decision)?);
        }

        round = round.next();
    }

    if !json {
        print_summary(&stats, &history);
    }
    Ok(())
}

/// Win rate over all resolved records, if any have resolved yet.
fn accuracy_of(history: &History) -> Option<f64> {
    let resolved: Vec<Resolution> = history
        .records()
        .iter()
        .map(|r| r.status)
        .filter(|s| s.is_resolved())
        .collect();
    if resolved.is_empty() {
        return None;
    }
    let wins = resolved.iter().filter(|s| **s == Resolution::Win).count();
    Some(wins as f64 / resolved.len() as f64)
}

fn print_summary(stats: &SimStats, history: &History) {
    let (mut wins, mut losses, mut cooldowns) = (0u64, 0u64, 0u64);
    for record in history.records() {
        match record.status {
            Resolution::Win => wins += 1,
            Resolution::Loss => losses += 1,
            Resolution::Cooldown => cooldowns += 1,
            Resolution::Pending => {}
        }
    }
    let resolved = wins + losses;

    println!();
    println!("=== Simulation Result ===");
    println!("Cycles:           {}", stats.cycles);
    println!("Fallback cycles:  {}", stats.fallback_cycles);
    println!("Defensive cycles: {}", stats.defensive_cycles);
    println!("Confident cycles: {}", stats.confident_cycles);
    println!();
    println!("--- Retained History ---");
    println!("Records:          {}", history.len());
    println!("Wins:             {wins}");
    println!("Losses:           {losses}");
    println!("Cooldowns:        {cooldowns}");
    if resolved > 0 {
        println!(
            "Win rate:         {:.1}%",
            wins as f64 / resolved as f64 * 100.0
        );
    }
    println!();
}
