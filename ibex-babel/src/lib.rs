//! Linger to Ibex stimulus conversion
//!
//!     This crate converts psycholinguistics stimulus lists written in the Linger text format into
//!     Ibex data includes, the JavaScript files the Ibex experiment platform loads its trials from.
//!
//!     This is a pure lib, that is, it powers the linger2ibex CLI but is shell agnostic: no code
//!     here reads files, prints or looks at env vars. Callers hand in source text and get the
//!     output text back.
//!
//! Architecture
//!
//!     The conversion is a one pass pipeline:
//!
//!         Linger text → parse_linger → Vec<StimulusItem> (IR) → serialize_to_ibex → Ibex text
//!
//!     Parsing completes before rendering starts, and both are all or nothing: a single bad line
//!     fails the whole conversion instead of producing a partial experiment file.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── experiment.rs           # ExperimentType, the closed set of trial templates
//!     ├── ir                      # StimulusItem and friends
//!     ├── formats
//!     │   ├── linger              # Linger parser
//!     │   └── ibex                # Ibex serializer and its options
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── <format>
//!     │   └── <testname>.rs
//!     └── fixtures
//!         ├── <docname>.txt       # Linger input
//!         └── <docname>.<type>.js # expected Ibex output
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes them.
//!
//! Experiment Types
//!
//!     The experiment type picks the Ibex controller used for every stimulus trial. It is chosen
//!     once per conversion and is a plain enum, see ./experiment.rs. Adding a template means adding
//!     a variant and its trial body in ./formats/ibex/serializer.rs.
pub mod error;
pub mod experiment;
pub mod formats;
pub mod ir;

pub use error::ConvertError;
pub use experiment::ExperimentType;
pub use formats::ibex::IbexOptions;

/// Converts Linger source text into a complete Ibex data include.
///
/// Fails on the first malformed line, before anything is rendered.
pub fn convert(
    source: &str,
    experiment: ExperimentType,
    options: &IbexOptions,
) -> Result<String, ConvertError> {
    let items = formats::linger::parse_linger(source)?;
    formats::ibex::serialize_to_ibex(&items, experiment, options)
}
