/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate lib_linkpred;

use std::io;
use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use log::LevelFilter;

use lib_linkpred::linkpred::error::{LPError, LPResult};
use lib_linkpred::linkpred::input::Input;
use lib_linkpred::linkpred::link_prediction::experiment::ExperimentConfig;
use lib_linkpred::linkpred::link_prediction::scorers::ScorerKind;
use lib_linkpred::linkpred::link_prediction_transformer::LinkPredictionTransformer;
use lib_linkpred::linkpred::output::Output;
use lib_linkpred::linkpred::transformer_base::TransformerBase;

fn get_command_line_args() -> ArgMatches<'static> {
    let matches: ArgMatches = App::new("Link Predictor")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Benchmarks topological link prediction on graphs specified from stdin \
             (one `graph_id\\tsource_id\\ttarget_id` row per edge).",
        )
        .arg(
            Arg::with_name("fractions")
                .short("f")
                .long("fractions")
                .takes_value(true)
                .help("Comma-separated fractions of edges to hide, each in [0, 1) (default = 0.05,0.1)."),
        )
        .arg(
            Arg::with_name("k_list")
                .short("k")
                .long("k_list")
                .takes_value(true)
                .help("Comma-separated positive cutoffs for precision@k / recall@k (default = 50,100,200,400)."),
        )
        .arg(
            Arg::with_name("scorers")
                .short("s")
                .long("scorers")
                .takes_value(true)
                .help("Comma-separated scorers among common_neighbors, jaccard, adamic_adar (default = all)."),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for edge removal; graph i of the input uses seed + i (default = 0)."),
        )
        .arg(
            Arg::with_name("largest_cc")
                .long("largest_cc")
                .help("Restrict each graph to its largest connected component before splitting."),
        )
        .arg(
            Arg::with_name("parallel")
                .short("p")
                .long("parallel")
                .help("Scan candidate pairs on all cores."),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more (-v for debug, -vv for trace). Logs go to stderr."),
        )
        .get_matches();
    matches
}

fn parse_list<T>(raw: &str) -> LPResult<Vec<T>>
where
    T: FromStr,
    LPError: From<T::Err>,
{
    raw.split(',')
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(|x| x.parse::<T>().map_err(LPError::from))
        .collect()
}

fn get_config(matches: &ArgMatches) -> LPResult<ExperimentConfig> {
    let mut config = ExperimentConfig::default();
    if let Some(raw) = matches.value_of("fractions") {
        config.fractions = parse_list::<f64>(raw)?;
    }
    if let Some(raw) = matches.value_of("k_list") {
        config.k_list = parse_list::<usize>(raw)?;
    }
    if let Some(raw) = matches.value_of("scorers") {
        config.scorers = parse_list::<ScorerKind>(raw)?;
    }
    if let Some(raw) = matches.value_of("seed") {
        config.seed = raw.parse::<u64>()?;
    }
    config.largest_cc = matches.is_present("largest_cc");
    config.parallel = matches.is_present("parallel");
    config.validate()?;
    Ok(config)
}

fn main() -> LPResult<()> {
    let matches: ArgMatches = get_command_line_args();
    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| LPError::from(e.to_string()))?;

    let config = get_config(&matches)?;
    log::info!("Starting link prediction benchmark: {:?}", config);
    let mut transformer = LinkPredictionTransformer::new(config)?;
    let stdio: io::Stdin = io::stdin();
    let input: Input = Input::console(&stdio);
    let output: Output = Output::console();
    transformer.run(input, output)?;
    log::info!("Benchmark completed.");
    Ok(())
}
