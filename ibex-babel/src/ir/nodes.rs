//! Core data structures for the Intermediate Representation (IR).

/// One trial, as read from a single Linger item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StimulusItem {
    pub header: ItemHeader,
    /// Words of the presented sentence, in reading order.
    pub segments: Vec<String>,
    pub questions: Vec<Question>,
    /// 1-based line number of the item header in the source.
    pub line: usize,
}

impl StimulusItem {
    /// The sentence as presented: segments separated by single spaces.
    pub fn sentence(&self) -> String {
        self.segments.join(" ")
    }
}

/// The identifying header of an item: `# <experiment> <item> <condition> ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemHeader {
    pub experiment: String,
    pub item: i64,
    pub condition: String,
    /// Trailing header fields. Carried along but never rendered.
    pub rest: Vec<String>,
}

impl ItemHeader {
    /// The Ibex condition label, `<experiment>_<condition>`.
    pub fn label(&self) -> String {
        format!("{}_{}", self.experiment, self.condition)
    }

    /// Fillers carry no meaningful item number and are not Latin-square grouped.
    pub fn is_filler(&self, filler_prefix: &str) -> bool {
        self.experiment.starts_with(filler_prefix)
    }
}

/// A comprehension question asked after the sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub correct: Answer,
}

impl Question {
    /// Answer labels with the correct one first, as Ibex's `hasCorrect` expects.
    pub fn answers(&self) -> [&'static str; 2] {
        match self.correct {
            Answer::Yes => ["Yes", "No"],
            Answer::No => ["No", "Yes"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Accepts `y`, `yes`, `n` and `no` in any case.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "y" | "yes" => Some(Answer::Yes),
            "n" | "no" => Some(Answer::No),
            _ => None,
        }
    }
}
