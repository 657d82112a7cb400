mod report;

use anyhow::{anyhow, Result};
use clap::{arg, Command};
use rho_algorithms::{solve_challenge, ConflictIndex};
use rho_challenges::cycle_rho::{Challenge, Solution, Track};
use rho_utils::{jsonify, load_json_arg, seed_from_str};
use serde_json::{Map, Value};
use std::{cell::RefCell, fs, path::PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("rho-runtime")
        .about("Searches for and verifies rho labelings of cycle unions")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compute_solution")
                .about("Computes a labeling and prints the report")
                .arg(
                    arg!(<SETTINGS> "Track json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "String hashed into the search seed (random if omitted)")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the solution will be saved to this file path as json")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a labeling")
                .arg(
                    arg!(<SETTINGS> "Track json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("inspect_graph")
                .about("Prints every node with its successor and predecessor")
                .arg(
                    arg!(<SETTINGS> "Track json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("compute_solution", sub_m)) => compute_solution(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("seed").cloned(),
            sub_m.get_one::<String>("hyperparameters").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        Some(("inspect_graph", sub_m)) => {
            inspect_graph(sub_m.get_one::<String>("SETTINGS").unwrap().clone())
        }
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn compute_solution(
    settings: String,
    seed: Option<String>,
    hyperparameters: Option<String>,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let track: Track = load_json_arg(&settings, "settings")?;
    let hyperparameters = hyperparameters
        .map(|h| load_json_arg::<Map<String, Value>>(&h, "hyperparameters"))
        .transpose()?;
    let seed = seed.unwrap_or_else(|| {
        let seed = rand::random::<u64>().to_string();
        tracing::info!("No seed given, pass --seed {} to repeat this run", seed);
        seed
    });
    let seed = seed_from_str(&seed);

    let challenge = Challenge::generate_instance(&seed, &track)?;
    tracing::info!(
        cycles = challenge.cycle_sizes.len(),
        num_nodes = challenge.num_nodes,
        modulus = challenge.modulus,
        "Searching for a rho labeling"
    );

    let solution = RefCell::new(Solution::new());
    let save_solution_fn = |s: &Solution| -> Result<()> {
        *solution.borrow_mut() = s.clone();
        Ok(())
    };
    solve_challenge(&challenge, &save_solution_fn, &hyperparameters)?;
    let solution = solution.into_inner();

    let graph = challenge.labelled_graph(&solution)?;
    let index = ConflictIndex::build(&graph);
    println!("{}", report::format_report(&graph, &index));

    if let Some(path) = output_file {
        fs::write(&path, jsonify(&solution)?)?;
        tracing::info!(path = %path.display(), "Solution written");
    }
    Ok(())
}

pub fn verify_solution(settings: String, solution: String) -> Result<()> {
    let track: Track = load_json_arg(&settings, "settings")?;
    let solution: Solution = load_json_arg(&solution, "solution")?;
    // verification never consumes randomness
    let challenge = Challenge::generate_instance(&[0u8; 32], &track)?;

    match challenge.verify_solution(&solution) {
        Ok(()) => {
            println!("Validated!");
            Ok(())
        }
        Err(e) => {
            println!("Not Good!");
            Err(anyhow!("Verification error: {}", e))
        }
    }
}

pub fn inspect_graph(settings: String) -> Result<()> {
    let track: Track = load_json_arg(&settings, "settings")?;
    let challenge = Challenge::generate_instance(&[0u8; 32], &track)?;
    print!("{}", report::format_adjacency(&challenge.build_graph()?));
    Ok(())
}
