//! Runs the worked examples and checks every hand-written traversal
//! against its map/filter/reduce version.
//!
//! Usage: cargo run --bin abstract_list_demo -- --numbers 1,2,3 --threshold 20

use abstract_list::combinators::filter;
use abstract_list::derived::{checked_product, checked_sum, describe, describe_with_reduce};
use abstract_list::worked_examples::{
    CheckOutcome, checked_add1_to_each, nested_pairs_with_reduce, run_self_checks,
    sample_players, verify_all,
};
use abstract_list_common::list::from_sequence;
use anyhow::Context;
use clap::Parser;
use log::debug;

#[derive(Debug, Parser)]
#[command(about = "map, filter and reduce as abstractions over list recursion")]
struct Args {
    /// Comma-separated integers used for the numeric examples.
    #[arg(long, value_delimiter = ',', default_value = "1,2,3", allow_hyphen_values = true)]
    numbers: Vec<i64>,

    /// Players must score strictly more than this to be selected.
    #[arg(long, default_value_t = 20, allow_hyphen_values = true)]
    threshold: i64,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    debug!("{args:?}");

    let numbers = from_sequence(args.numbers.iter().copied());
    let players = sample_players();

    println!("== Lists");
    println!("numbers: {numbers}");
    println!("players: {}", describe(&players));

    println!("\n== map");
    let incremented = checked_add1_to_each(&numbers).context("add1 to each")?;
    println!("add1 to each: {incremented}");

    println!("\n== filter");
    let selected = filter(&players, |p| p.score > args.threshold);
    println!("score > {}: {selected}", args.threshold);

    println!("\n== reduce");
    println!("sum:     {}", checked_sum(&numbers).context("sum of --numbers")?);
    println!("product: {}", checked_product(&numbers).context("product of --numbers")?);
    println!("nested:  {}", nested_pairs_with_reduce(&numbers));
    println!("describe via reduce: {}", describe_with_reduce(&numbers));

    println!("\n== Self-checks");
    let outcomes = run_self_checks(&numbers, &players, args.threshold)
        .context("the worked examples cannot run on these inputs")?;
    for outcome in &outcomes {
        print_outcome(outcome);
    }

    verify_all(&outcomes)
        .context("a hand-written traversal disagrees with its combinator version")?;
    println!("\nall {} checks passed", outcomes.len());
    Ok(())
}

fn print_outcome(outcome: &CheckOutcome) {
    let mark = if outcome.passed() { "ok  " } else { "FAIL" };
    println!("[{mark}] {:<28} {}", outcome.name, outcome.actual);
}
