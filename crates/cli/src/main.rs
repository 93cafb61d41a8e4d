//! nvleaf CLI — runs the leaf-strategy comparison matrix.
//!
//! The harness crates own no files and print nothing; every side effect
//! (results directory, CSV file, console summary, logging setup) lives
//! here.

mod commands;

use std::fs;
use std::path::Path;
use std::process;

use nvleaf_core::BenchConfig;
use nvleaf_harness::{compare_strategies, to_csv, RunRecord};
use nvleaf_strategies::{CostModel, StrategyKind};

use commands::build_cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let matches = build_cli().get_matches();

    let config = BenchConfig {
        prefill_count: *matches.get_one::<u64>("prefill").unwrap(),
        ops_count: *matches.get_one::<u64>("ops").unwrap(),
        write_ratio: 0.5, // replaced per run by the suite
        seed: *matches.get_one::<u64>("seed").unwrap(),
        key_max: *matches.get_one::<u64>("key-max").unwrap(),
        leaf_capacity: *matches.get_one::<usize>("capacity").unwrap(),
    };

    let model = match matches
        .get_one::<String>("cost-model")
        .unwrap()
        .parse::<CostModel>()
    {
        Ok(model) => model,
        Err(e) => fail(&e),
    };

    let write_ratios = match parse_ratios(matches.get_one::<String>("write-ratios").unwrap()) {
        Ok(ratios) => ratios,
        Err(e) => fail(&e),
    };

    let kinds = match matches.get_one::<String>("strategies") {
        Some(list) => match parse_strategies(list) {
            Ok(kinds) => kinds,
            Err(e) => fail(&e),
        },
        None => StrategyKind::ALL.to_vec(),
    };

    let records = match compare_strategies(&config, &kinds, &write_ratios, model) {
        Ok(records) => records,
        Err(e) => fail(&e.to_string()),
    };

    if matches.get_flag("json") {
        match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&e.to_string()),
        }
    } else {
        let out_dir = matches.get_one::<String>("out").unwrap();
        let path = Path::new(out_dir).join("leaf_metrics.csv");
        if let Err(e) = fs::create_dir_all(out_dir).and_then(|_| fs::write(&path, to_csv(&records)))
        {
            fail(&format!("cannot write {}: {}", path.display(), e));
        }
        if !matches.get_flag("quiet") {
            print_summary(&records);
            println!("Results written to {}", path.display());
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn parse_ratios(list: &str) -> Result<Vec<f64>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| format!("invalid write ratio: {s}"))
        })
        .collect()
}

fn parse_strategies(list: &str) -> Result<Vec<StrategyKind>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

fn print_summary(records: &[RunRecord]) {
    println!(
        "{:<14} {:>6} {:>14} {:>12} {:>8} {:>8}",
        "variant", "wr", "ops/sec", "Nw", "Nclf", "Nmf"
    );
    for r in records {
        println!(
            "{:<14} {:>6} {:>14.0} {:>12} {:>8} {:>8}",
            r.variant, r.write_ratio, r.throughput_ops_per_sec, r.word_writes,
            r.cache_line_flushes, r.memory_fences
        );
    }
}
