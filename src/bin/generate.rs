use clap::Parser;
use eight_puzzle_solver::engine::PuzzleState;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Emit reproducible solvable 8-puzzle instances", long_about = None)]
struct Args {
    /// Number of instances to emit, one encoding per line
    #[clap(short, long, default_value_t = 10)]
    count: u64,

    /// Length of the random walk applied to the goal state
    #[clap(short, long, default_value_t = 25)]
    steps: usize,

    /// Base seed for the deterministic scrambler; instance i uses seed + i
    #[clap(long, default_value_t = 514514)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    for i in 0..args.count {
        let state = PuzzleState::scrambled(args.steps, args.seed.wrapping_add(i));
        println!("{}", state.encode());
    }
}
