//! Reference database CLI.

use clap::{ColorChoice, Parser};
use refdb_cli::commands::{ListOptions, load_catalog, run_export, run_list, run_show};
use refdb_cli::export::ExportFormat;
use refdb_cli::interactive::run_interactive;
use refdb_cli::logging::{LogConfig, LogFormat, init_logging};
use refdb_cli::render::{RenderOptions, Styling};
use std::io::{self, IsTerminal, Write};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, ExportFormatArg, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let render = render_options_from_cli(&cli);
    let catalog = match load_catalog(cli.data.clone()) {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Command::List(args) => {
            let options = ListOptions {
                query: args.query,
                expand: args.expand,
                expand_all: args.expand_all,
            };
            run_list(&catalog, &options, &render, &mut out)
        }
        Command::Show(args) => run_show(&catalog, &args.name, &render, &mut out),
        Command::Interactive => {
            run_interactive(&catalog, io::stdin().lock(), &mut out, &render).map(|()| true)
        }
        Command::Export(args) => {
            let format = match args.format {
                ExportFormatArg::Json => ExportFormat::Json,
                ExportFormatArg::Csv => ExportFormat::Csv,
            };
            run_export(&catalog, args.query.as_deref(), format, &mut out).map(|_| true)
        }
    };
    if let Err(error) = out.flush() {
        eprintln!("error: failed to flush output: {error}");
    }
    let exit_code = match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_ansi(ansi);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.log_file = cli.log_file.clone();
    config
}

fn render_options_from_cli(cli: &Cli) -> RenderOptions {
    let styling = match cli.color.color {
        ColorChoice::Always => Styling::Always,
        ColorChoice::Never => Styling::Never,
        ColorChoice::Auto => Styling::Auto,
    };
    RenderOptions {
        styling,
        ..RenderOptions::default()
    }
}
