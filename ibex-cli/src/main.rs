// Command-line interface for linger2ibex
//
// Converts a Linger stimulus file into an Ibex data include. The conversion itself lives in the
// ibex-babel crate; this binary resolves the experiment type and configuration, does the file I/O
// and turns errors into diagnostics and exit codes.
//
// Usage:
//  linger2ibex <input> [experiment-type] [--config <file>] [-o <file>]  - Convert (stdout by default)
//  linger2ibex --list-types                                             - List experiment types
//
// The experiment type is resolved before the input is read, so a bad type never touches the
// filesystem. Output is rendered completely in memory and written once: on any error nothing is
// written to stdout.

mod error;

use crate::error::CliError;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use ibex_babel::{ExperimentType, IbexOptions};
use ibex_config::{IbexConfig, Loader};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when present.
const LOCAL_CONFIG_FILE: &str = "linger2ibex.toml";

fn build_cli() -> Command {
    Command::new("linger2ibex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Linger stimulus files into Ibex data includes")
        .long_about(
            "linger2ibex converts psycholinguistics stimuli written in the Linger format into\n\
            an Ibex data include (a JavaScript file loaded by the Ibex experiment platform).\n\n\
            Experiment types:\n  \
            - DashedSentence:        self-paced reading (default)\n  \
            - AcceptabilityJudgment: sentence rating on a scale\n\n\
            Examples:\n  \
            linger2ibex stimuli.txt > data/stimuli.js\n  \
            linger2ibex stimuli.txt AcceptabilityJudgment -o data/stimuli.js\n  \
            linger2ibex stimuli.txt --config experiment.toml",
        )
        .arg(
            Arg::new("input")
                .help("Path to the Linger stimulus file")
                .required_unless_present("list-types")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("experiment-type")
                .help("Ibex controller for the stimuli (defaults to 'DashedSentence')")
                .long_help(
                    "Ibex controller used for every stimulus trial.\n\n\
                    One of: DashedSentence, AcceptabilityJudgment.\n\
                    When omitted, convert.experiment_type from the configuration is used.",
                )
                .required(false)
                .index(2)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a linger2ibex.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-types")
                .long("list-types")
                .help("List available experiment types")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-types") {
        handle_list_types_command();
        return;
    }

    if let Err(err) = handle_convert_command(&matches) {
        tracing::debug!(?err, "conversion failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with the generated file.
fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) -> Result<(), CliError> {
    // An explicit type is checked before anything else is loaded
    let explicit_type = matches
        .get_one::<String>("experiment-type")
        .map(|name| name.parse::<ExperimentType>())
        .transpose()?;

    let config_path = matches.get_one::<String>("config").map(String::as_str);
    let config = load_cli_config(config_path, explicit_type)?;
    let experiment = config.convert.experiment_type.parse::<ExperimentType>()?;
    let options = IbexOptions::from(&config);

    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| CliError::Configuration("an input file is required".to_string()))?;
    tracing::debug!(
        input = input.as_str(),
        experiment = experiment.name(),
        "converting"
    );

    let output = convert_file(Path::new(input), experiment, &options)?;

    match matches.get_one::<String>("output") {
        Some(path) => fs::write(path, format!("{output}\n")).map_err(|source| CliError::Write {
            path: path.into(),
            source,
        })?,
        None => write_output(&mut io::stdout().lock(), &output)?,
    }
    Ok(())
}

/// Write the rendered file and its trailing newline. A closed pipe is reported, not a panic.
fn write_output(writer: &mut impl Write, output: &str) -> Result<(), CliError> {
    writeln!(writer, "{output}")
        .and_then(|()| writer.flush())
        .map_err(CliError::Stdout)
}

/// Read and convert one Linger file. The file is closed before rendering starts.
fn convert_file(
    input: &Path,
    experiment: ExperimentType,
    options: &IbexOptions,
) -> Result<String, CliError> {
    let source = fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(ibex_babel::convert(&source, experiment, options)?)
}

/// Handle the list-types command
fn handle_list_types_command() {
    println!("Available experiment types:\n");
    for experiment in ExperimentType::ALL {
        let marker = if experiment == ExperimentType::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<24}{}{marker}",
            experiment.name(),
            experiment.description()
        );
    }
}

/// Layer the local and explicit config files; a positional experiment type beats both.
fn load_cli_config(
    explicit_path: Option<&str>,
    experiment: Option<ExperimentType>,
) -> Result<IbexConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = explicit_path {
        loader = loader.with_file(path);
    }
    if let Some(experiment) = experiment {
        loader = loader.set_override("convert.experiment_type", experiment.name())?;
    }

    Ok(loader.build()?)
}
