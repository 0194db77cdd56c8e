//! Linger format implementation
//!
//! Linger stimulus files are line oriented. Each item opens with a header
//! line, is followed by the sentence, and then by any comprehension
//! questions:
//!
//! ```text
//! # relclause 1 subj extra-field
//! The reporter who the senator attacked admitted the error.
//! ? Did the senator attack the reporter? Y
//!
//! # filler 12 a
//! The children went outside to play.
//! ```
//!
//! # Element Mapping Table
//!
//! | Linger line            | IR                                         |
//! |------------------------|--------------------------------------------|
//! | `# exp item cond ...`  | [`ItemHeader`](crate::ir::ItemHeader)      |
//! | sentence line          | `StimulusItem::segments` (whitespace split) |
//! | `? text answer`        | [`Question`](crate::ir::Question)          |
//! | blank line             | ends the current item                      |
//!
//! Only parsing is supported: nothing in the toolchain writes Linger files.

pub mod parser;

pub use parser::parse_linger;
