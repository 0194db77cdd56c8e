//! Experiment types
//!
//! Each experiment type names the Ibex controller used for every stimulus
//! trial. The type is fixed for a whole conversion.

use crate::error::ConvertError;
use std::fmt;
use std::str::FromStr;

/// The Ibex controller a stimulus list is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExperimentType {
    /// Self-paced reading, word by word.
    #[default]
    DashedSentence,
    /// Whole-sentence rating on a scale.
    AcceptabilityJudgment,
}

impl ExperimentType {
    /// All supported experiment types, default first.
    pub const ALL: [ExperimentType; 2] = [
        ExperimentType::DashedSentence,
        ExperimentType::AcceptabilityJudgment,
    ];

    /// The Ibex controller name, also accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ExperimentType::DashedSentence => "DashedSentence",
            ExperimentType::AcceptabilityJudgment => "AcceptabilityJudgment",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExperimentType::DashedSentence => "Self-paced reading (word-by-word reveal)",
            ExperimentType::AcceptabilityJudgment => "Acceptability judgment on a rating scale",
        }
    }
}

impl fmt::Display for ExperimentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExperimentType {
    type Err = ConvertError;

    /// Names are matched exactly, as Ibex controller names are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperimentType::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| ConvertError::UnknownExperimentType(s.to_string()))
    }
}
