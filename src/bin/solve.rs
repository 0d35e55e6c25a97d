use anyhow::{bail, Context, Result};
use clap::Parser;
use eight_puzzle_solver::strategies::{Algorithm, DEFAULT_DEPTH_LIMIT};
use eight_puzzle_solver::utils::state_from_str;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve a single 8-puzzle instance", long_about = None)]
struct Args {
    /// Puzzle encoding, row-major, 0 = blank (e.g. 102345678)
    puzzle: String,

    /// Search strategy to run
    #[clap(short, long, default_value = "a_star_manhattan")]
    algorithm: Algorithm,

    /// Depth bound for the depth-limited strategies
    #[clap(short, long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let state = state_from_str(&args.puzzle)
        .with_context(|| format!("invalid puzzle encoding '{}'", args.puzzle))?;
    if !state.is_solvable() {
        bail!("puzzle {} is unsolvable (odd inversion count)", args.puzzle);
    }

    println!("Initial state:\n{}\n", state);
    println!("Searching with {}...\n", args.algorithm);

    let result = args.algorithm.run_with_depth(&state, args.depth);

    if result.solved {
        println!("Solved, cost {} ({} moves):", result.cost, result.moves.len());
        for (i, mv) in result.moves.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, mv);
        }
    } else {
        println!("No solution found within the configured bounds.");
    }

    println!("\nNodes generated:  {}", result.metrics.nodes_generated);
    println!("Nodes expanded:   {}", result.metrics.nodes_expanded);
    println!("Max nodes stored: {}", result.metrics.max_nodes_stored);
    println!("Max depth:        {}", result.max_depth);
    println!(
        "Execution time:   {:.4}s",
        result.metrics.elapsed.as_secs_f64()
    );

    Ok(())
}
