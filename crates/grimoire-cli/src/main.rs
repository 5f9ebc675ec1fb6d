//! Grimoire CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use grimoire_cli::commands::{
    load_tables, run_efficiency, run_extract, run_generate, run_map_element, run_vocab,
};
use grimoire_cli::logging::{LogConfig, LogFormat, init_logging};
use grimoire_cli::summary::{
    print_efficiency, print_extraction, print_json, print_mapping, print_spell, print_vocab,
};
use grimoire_cli::types::GenerateRequest;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let context = load_tables(cli.data_dir.as_deref())?;
    match &cli.command {
        Command::Extract(args) => {
            let extraction = run_extract(&context, &args.prompt);
            match args.format {
                OutputFormatArg::Table => print_extraction(&extraction),
                OutputFormatArg::Json => print_json(&extraction)?,
            }
        }
        Command::Generate(args) => {
            let request = GenerateRequest {
                prompt: args.prompt.clone(),
                seed: args.seed,
                bloodline: args.bloodline.clone(),
            };
            let spell = run_generate(&context, &request);
            match args.format {
                OutputFormatArg::Table => print_spell(&spell),
                OutputFormatArg::Json => print_json(&spell)?,
            }
        }
        Command::MapElement(args) => {
            print_mapping(&run_map_element(
                &context,
                &args.element,
                args.effect.as_deref(),
            ));
        }
        Command::Efficiency(args) => {
            print_efficiency(&run_efficiency(&context, &args.bloodline, &args.element));
        }
        Command::Vocab(args) => print_vocab(&run_vocab(&context, args.category)),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
