//! Item-economy balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # 1000 trials, tier 3
//!   cargo run --bin simulate -- -n 5000 -t 5 -e 7  # tier 5 to +7
//!   cargo run --bin simulate -- --seed 42 --json   # reproducible + JSON
//!   cargo run --bin simulate -- --cost             # closed-form cost only

use relicforge::config::EngineConfig;
use relicforge::items::Grade;
use relicforge::simulator::{project_enhance_cost, run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let sim = parse_args(&args);
    let cfg = EngineConfig::default();

    if args.iter().any(|a| a == "--cost") {
        let report = project_enhance_cost(&cfg, sim.tier);
        println!("Expected enhancement cost, tier {}:", report.tier);
        for level in &report.levels {
            println!(
                "  +{}: rate {:>5.1}%  attempts {:>6.2}  protect/attempt {:>5}  expected {:>10.1}",
                level.target_level,
                level.success_rate,
                level.expected_attempts,
                level.protect_per_attempt,
                level.expected_protect
            );
        }
        println!(
            "Total: {:.1} protection units (~{:.0} coins)",
            report.total_protect, report.total_price
        );
        return;
    }

    println!("Running {} trials (tier {})...", sim.trials, sim.tier);
    println!();

    let report = run_simulation(&sim, &cfg);
    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        println!("{}", report.to_json());
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut sim = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--trials" => {
                if let Some(v) = parse_next(args, i) {
                    sim.trials = v;
                }
                i += 1;
            }
            "-t" | "--tier" => {
                if let Some(v) = parse_next(args, i) {
                    sim.tier = v;
                }
                i += 1;
            }
            "-e" | "--enhance" => {
                if let Some(v) = parse_next(args, i) {
                    sim.target_enhance = v;
                }
                i += 1;
            }
            "-g" | "--grade" => {
                if let Some(name) = args.get(i + 1) {
                    if let Some(grade) = parse_grade(name) {
                        sim.target_grade = grade;
                    }
                }
                i += 1;
            }
            "--min-bonus" => {
                sim.min_bonus_attack = parse_next(args, i);
                i += 1;
            }
            "--sr" => sim.require_sr = true,
            "--seed" => {
                sim.seed = parse_next(args, i);
                i += 1;
            }
            "-q" | "--quiet" => sim.verbosity = 0,
            "-v" | "--verbose" => sim.verbosity = 2,
            _ => {}
        }
        i += 1;
    }
    sim
}

fn parse_next<T: std::str::FromStr>(args: &[String], i: usize) -> Option<T> {
    args.get(i + 1).and_then(|v| v.parse().ok())
}

fn parse_grade(name: &str) -> Option<Grade> {
    Grade::ALL
        .into_iter()
        .find(|g| g.name().eq_ignore_ascii_case(name))
}
