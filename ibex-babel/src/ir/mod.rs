//! Intermediate Representation (IR) for stimulus lists.
//!
//! The Linger parser produces these records and the Ibex serializer consumes
//! them. Nothing here knows about either text format.

pub mod nodes;

pub use nodes::{Answer, ItemHeader, Question, StimulusItem};
