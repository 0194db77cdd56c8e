use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the experiment types from ibex-babel's ExperimentType.
// Build scripts can't depend on the crate they build alongside, so the names are repeated here.
const EXPERIMENT_TYPES: &[&str] = &["DashedSentence", "AcceptabilityJudgment"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("linger2ibex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Linger stimulus files into Ibex data includes")
        .arg(
            Arg::new("input")
                .help("Path to the Linger stimulus file")
                .required_unless_present("list-types")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("experiment-type")
                .help("Ibex controller for the stimuli")
                .value_parser(clap::builder::PossibleValuesParser::new(EXPERIMENT_TYPES))
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
        );

    generate_to(Bash, &mut cmd, "linger2ibex", &outdir)?;
    generate_to(Zsh, &mut cmd, "linger2ibex", &outdir)?;
    generate_to(Fish, &mut cmd, "linger2ibex", &outdir)?;

    Ok(())
}
