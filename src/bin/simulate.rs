//! Gacha draw simulator CLI.
//!
//! Run Monte Carlo simulations of the style-draw mechanic.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 rounds, 15 draws
//!   cargo run --bin simulate -- -n 200 -d 10   # 200 rounds of 10 draws
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use gachasim::simulator::{run_simulation, trace_roster, SimConfig};
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, csv_dir, trace) = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              GACHA DRAW SIMULATOR                             ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Rounds:         {}", config.rounds);
    println!("  Draws/round:    {}", config.draws_per_round);
    println!(
        "  Weight curve:   {} × {}^value",
        config.initial_weight, config.decay_ratio
    );
    println!("  Characters:     {}", config.roster.len());
    if config.reroll_enabled {
        println!("  Rerolls:        {} per round", config.reroll_budget);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    if trace {
        println!("Tracing one round per character...");
        println!();
        match trace_roster(&config) {
            Ok(log) => println!("{}", log),
            Err(err) => {
                eprintln!("trace failed: {}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("simulation failed: {}", err);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    // Optionally dump the per-character distribution tables
    if let Some(dir) = csv_dir {
        let paths = report
            .write_csv_files(Path::new(&dir))
            .expect("Failed to write CSV reports");
        for path in paths {
            println!("CSV written to: {}", path.display());
        }
    }

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "gacha_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> (SimConfig, Option<String>, bool) {
    let mut config = SimConfig::default();
    let mut csv_dir = None;
    let mut trace = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--rounds" => {
                if i + 1 < args.len() {
                    config.rounds = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-d" | "--draws" => {
                if i + 1 < args.len() {
                    config.draws_per_round = args[i + 1].parse().unwrap_or(15);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-w" | "--weight" => {
                if i + 1 < args.len() {
                    config.initial_weight = args[i + 1].parse().unwrap_or(500.0);
                    i += 1;
                }
            }
            "-r" | "--ratio" => {
                if i + 1 < args.len() {
                    config.decay_ratio = args[i + 1].parse().unwrap_or(0.6);
                    i += 1;
                }
            }
            "--reroll" => {
                config.reroll_enabled = true;
                if i + 1 < args.len() {
                    if let Ok(budget) = args[i + 1].parse::<u32>() {
                        config.reroll_budget = budget;
                        i += 1;
                    }
                }
            }
            "--threshold" => {
                if i + 1 < args.len() {
                    config.success_threshold = args[i + 1].parse().unwrap_or(7);
                    i += 1;
                }
            }
            "--csv" => {
                csv_dir = Some(".".to_string());
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    csv_dir = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--trace" => {
                trace = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick_test();
            }
            _ => {}
        }
        i += 1;
    }

    (config, csv_dir, trace)
}

fn print_help() {
    println!("Gacha Draw Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --rounds <N>     Number of simulated rounds (default: 1000)");
    println!("    -d, --draws <N>      Draws per character per round (default: 15)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    -w, --weight <W>     Base weight of an uninvested style (default: 500)");
    println!("    -r, --ratio <R>      Per-point weight decay ratio (default: 0.6)");
    println!("    --reroll [B]         Enable rerolls with budget B per round (default: 0)");
    println!("    --threshold <T>      Success threshold on final values (default: 7)");
    println!("    --csv [DIR]          Write per-character CSV tables (default dir: .)");
    println!("    --trace              Print a draw-by-draw walkthrough instead");
    println!("    -v, --verbose        Per-round progress output");
    println!("    --json               Save JSON report");
    println!("    --quick              Quick test (100 rounds, silent)");
    println!("    -h, --help           Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                    # Default run");
    println!("    cargo run --bin simulate -- -n 200 -d 10   # 200 rounds of 10 draws");
    println!("    cargo run --bin simulate -- --reroll 3     # 3 rerolls per round");
    println!("    cargo run --bin simulate -- --csv reports  # CSVs into reports/");
    println!("    cargo run --bin simulate -- --trace -s 42  # Seeded walkthrough");
}
