//! Clap command tree definition.

use clap::{value_parser, Arg, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("nvleaf")
        .about("Leaf-strategy micro-benchmarks for persistent-memory indexes")
        .arg(
            Arg::new("prefill")
                .long("prefill")
                .help("Keys inserted before the timed phase")
                .value_parser(value_parser!(u64))
                .default_value("5000"),
        )
        .arg(
            Arg::new("ops")
                .long("ops")
                .help("Timed operations per run")
                .value_parser(value_parser!(u64))
                .default_value("100000"),
        )
        .arg(
            Arg::new("write-ratios")
                .long("write-ratios")
                .help("Comma-separated insert fractions, one run set per value")
                .default_value("0.9,0.5,0.1,0.0"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Workload seed; same seed reproduces the same op stream")
                .value_parser(value_parser!(u64))
                .default_value("123"),
        )
        .arg(
            Arg::new("key-max")
                .long("key-max")
                .help("Keys are drawn uniformly from [1, key-max]")
                .value_parser(value_parser!(u64))
                .default_value("1000000000"),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .help("Leaf capacity")
                .value_parser(value_parser!(usize))
                .default_value("128"),
        )
        .arg(
            Arg::new("cost-model")
                .long("cost-model")
                .help("Pricing for shift-based inserts: positional or coefficient")
                .default_value("positional"),
        )
        .arg(
            Arg::new("strategies")
                .long("strategies")
                .help("Comma-separated variant subset (default: all five)"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .help("Results directory for the CSV file")
                .default_value("results"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print records as JSON to stdout instead of writing CSV")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress the console summary")
                .action(clap::ArgAction::SetTrue),
        )
}
