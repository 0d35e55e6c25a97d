use anyhow::{bail, Context, Result};
use clap::Parser;
use eight_puzzle_solver::solver::SearchResult;
use eight_puzzle_solver::strategies::Algorithm;
use eight_puzzle_solver::utils::state_from_str;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Evaluate a search strategy over a file of 8-puzzle instances",
    long_about = None
)]
struct Args {
    /// Text file with one 9-digit puzzle encoding per line
    input_file: PathBuf,

    /// Strategy to evaluate (e.g. bfs, a_star_manhattan, ida_star_manhattan)
    algorithm: Algorithm,

    /// Print per-puzzle progress and the full statistics table
    #[clap(long)]
    verbose: bool,

    /// Export summary and per-puzzle CSV files
    #[clap(long)]
    save: bool,
}

enum Status {
    Solved,
    Failed,
    Unsolvable,
}

/// One evaluated instance. `result` is absent for unsolvable puzzles, which
/// are never handed to a search.
struct Row {
    encoding: String,
    status: Status,
    result: Option<SearchResult>,
}

struct Summary {
    mean: f64,
    median: f64,
    min: f64,
    max: f64,
    std_dev: f64,
}

/// The reported metrics, each paired with an accessor into a solved result.
const METRICS: [(&str, fn(&SearchResult) -> f64); 6] = [
    ("Nodes Generated", |r| r.metrics.nodes_generated as f64),
    ("Nodes Expanded", |r| r.metrics.nodes_expanded as f64),
    ("Max Nodes Stored", |r| r.metrics.max_nodes_stored as f64),
    ("Solution Cost", |r| r.cost),
    ("Max Depth", |r| f64::from(r.max_depth)),
    ("Execution Time (s)", |r| r.metrics.elapsed.as_secs_f64()),
];

fn load_instances(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut instances = Vec::new();
    for (line_number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match state_from_str(line) {
            Ok(_) => instances.push(line.to_string()),
            Err(err) => {
                log::warn!(
                    "invalid puzzle at line {}: {} ({})",
                    line_number + 1,
                    line,
                    err
                );
            }
        }
    }
    Ok(instances)
}

fn evaluate(instances: &[String], algorithm: Algorithm, verbose: bool) -> Vec<Row> {
    let mut rows = Vec::with_capacity(instances.len());
    for (index, encoding) in instances.iter().enumerate() {
        if verbose {
            print!("Solving puzzle {}/{}: {} ", index + 1, instances.len(), encoding);
        }

        // Already validated by load_instances.
        let state = state_from_str(encoding).expect("instance list holds valid encodings");
        if !state.is_solvable() {
            if verbose {
                println!("(unsolvable)");
            }
            rows.push(Row {
                encoding: encoding.clone(),
                status: Status::Unsolvable,
                result: None,
            });
            continue;
        }

        let result = algorithm.run(&state);
        let status = if result.solved {
            if verbose {
                println!("(solved in {:.4}s)", result.metrics.elapsed.as_secs_f64());
            }
            Status::Solved
        } else {
            if verbose {
                println!("(failed)");
            }
            Status::Failed
        };
        rows.push(Row {
            encoding: encoding.clone(),
            status,
            result: Some(result),
        });
    }
    rows
}

fn summarize(values: &[f64]) -> Summary {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    // Sample standard deviation, zero for a single observation.
    let std_dev = if n > 1 {
        let variance = sorted
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / (n - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };
    Summary {
        mean,
        median,
        min: sorted[0],
        max: sorted[n - 1],
        std_dev,
    }
}

fn solved_metric_values(rows: &[Row], accessor: fn(&SearchResult) -> f64) -> Vec<f64> {
    rows.iter()
        .filter(|row| matches!(row.status, Status::Solved))
        .filter_map(|row| row.result.as_ref())
        .map(accessor)
        .collect()
}

fn print_results(rows: &[Row], algorithm: Algorithm, verbose: bool) {
    let total = rows.len();
    let solved = rows
        .iter()
        .filter(|row| matches!(row.status, Status::Solved))
        .count();
    let unsolvable = rows
        .iter()
        .filter(|row| matches!(row.status, Status::Unsolvable))
        .count();

    println!("\n{}", "=".repeat(60));
    println!("PERFORMANCE EVALUATION RESULTS");
    println!("{}", "=".repeat(60));
    println!("Algorithm: {}", algorithm);
    println!("Total puzzles: {}", total);
    println!("Solved puzzles: {}", solved);
    println!("Unsolvable puzzles: {}", unsolvable);
    println!("Success rate: {:.1}%", solved as f64 / total as f64 * 100.0);

    if verbose {
        println!(
            "\n{:<25} {:<12} {:<12} {:<12} {:<12} {:<12}",
            "PERFORMANCE METRICS", "MEAN", "MEDIAN", "MIN", "MAX", "STD DEV"
        );
        println!("{}", "-".repeat(85));
    } else {
        println!("\n{:<25} {:<12}", "PERFORMANCE METRICS", "MEAN");
        println!("{}", "-".repeat(37));
    }

    for (label, accessor) in METRICS {
        let values = solved_metric_values(rows, accessor);
        if values.is_empty() {
            continue;
        }
        let summary = summarize(&values);
        // Times get four decimals, counts two.
        let decimals = if label.starts_with("Execution") { 4 } else { 2 };
        if verbose {
            println!(
                "{:<25} {:<12.dec$} {:<12.dec$} {:<12.dec$} {:<12.dec$} {:<12.dec$}",
                label,
                summary.mean,
                summary.median,
                summary.min,
                summary.max,
                summary.std_dev,
                dec = decimals
            );
        } else {
            println!("{:<25} {:<12.dec$}", label, summary.mean, dec = decimals);
        }
    }
}

fn save_summary_csv(rows: &[Row], algorithm: Algorithm, path: &str) -> Result<()> {
    let total = rows.len();
    let solved = rows
        .iter()
        .filter(|row| matches!(row.status, Status::Solved))
        .count();
    let success_rate = solved as f64 / total as f64 * 100.0;

    let mut out = String::from(
        "Algorithm,Total_Puzzles,Solved_Puzzles,Success_Rate,Metric,Mean,Median,Min,Max,Std_Dev\n",
    );
    for (label, accessor) in METRICS {
        let values = solved_metric_values(rows, accessor);
        if values.is_empty() {
            continue;
        }
        let summary = summarize(&values);
        out.push_str(&format!(
            "{},{},{},{:.1}%,{},{:.4},{:.4},{:.4},{:.4},{:.4}\n",
            algorithm,
            total,
            solved,
            success_rate,
            label.replace(' ', "_"),
            summary.mean,
            summary.median,
            summary.min,
            summary.max,
            summary.std_dev
        ));
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path))
}

fn save_details_csv(rows: &[Row], path: &str) -> Result<()> {
    let mut out = String::from(
        "puzzle_index,initial_state,solved,nodes_generated,nodes_expanded,\
         max_nodes_stored,solution_cost,max_depth,execution_time\n",
    );
    for (index, row) in rows.iter().enumerate() {
        match &row.result {
            Some(result) => {
                out.push_str(&format!(
                    "{},{},{},{},{},{},{},{},{:.6}\n",
                    index + 1,
                    row.encoding,
                    result.solved,
                    result.metrics.nodes_generated,
                    result.metrics.nodes_expanded,
                    result.metrics.max_nodes_stored,
                    result.cost,
                    result.max_depth,
                    result.metrics.elapsed.as_secs_f64()
                ));
            }
            None => {
                // Unsolvable: no search ran, metrics stay blank.
                out.push_str(&format!("{},{},false,,,,,,\n", index + 1, row.encoding));
            }
        }
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let instances = load_instances(&args.input_file)?;
    if instances.is_empty() {
        bail!("no valid puzzles found in {}", args.input_file.display());
    }
    println!(
        "Loaded {} valid puzzles from {}",
        instances.len(),
        args.input_file.display()
    );
    if args.verbose {
        println!("Evaluating {} on {} puzzles...", args.algorithm, instances.len());
    } else {
        println!("Solving {} puzzle instances...", instances.len());
    }

    let rows = evaluate(&instances, args.algorithm, args.verbose);
    if !rows.iter().any(|row| matches!(row.status, Status::Solved)) {
        bail!("no puzzles were solved successfully");
    }

    print_results(&rows, args.algorithm, args.verbose);

    if args.save {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before unix epoch")
            .as_secs();
        let summary_path = format!("summary_{}_{}.csv", args.algorithm, stamp);
        let details_path = format!("details_{}_{}.csv", args.algorithm, stamp);
        save_summary_csv(&rows, args.algorithm, &summary_path)?;
        save_details_csv(&rows, &details_path)?;
        println!("\nResults saved to {} and {}", summary_path, details_path);
    }

    Ok(())
}
