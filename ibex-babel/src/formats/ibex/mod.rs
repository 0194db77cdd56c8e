//! Ibex data-include format
//!
//! Ibex experiments load their trials from a JavaScript "data include": a
//! source file assigning fixed top-level variables (`shuffleSequence`,
//! `defaults`, `items`, ...) that the Ibex runtime reads. This module writes
//! that file from IR stimulus items.
//!
//! # Trial Mapping Table
//!
//! | IR                         | Ibex                                                    |
//! |----------------------------|---------------------------------------------------------|
//! | `ItemHeader` (experiment)  | `["<exp>_<cond>", <item>]` Latin-square label           |
//! | `ItemHeader` (filler)      | `"<exp>_<cond>"` plain label                            |
//! | `segments`                 | `{s: "..."}`, words separated by spaces                 |
//! | `Question`                 | `"Question", {q: "...", as: [<correct>, <other>]}`      |
//!
//! The controller for every stimulus trial comes from the selected
//! [`ExperimentType`](crate::ExperimentType). Everything that is fixed text in
//! the generated file (messages, scale labels, practice trials) comes from
//! [`IbexOptions`]; its `Default` reproduces the stock Ibex example setup.
//!
//! Only serialization is supported.

mod js;
pub mod serializer;

pub use serializer::serialize_to_ibex;

/// Fixed text and settings written into the data include.
#[derive(Debug, Clone, PartialEq)]
pub struct IbexOptions {
    /// Experiments whose name starts with this are fillers.
    pub filler_prefix: String,
    pub completion_message: String,
    /// HTML file included by the intro form.
    pub intro_html: String,
    /// Shown between a sentence and its comprehension question.
    pub question_separator_message: String,
    pub separator: SeparatorOptions,
    /// `mode` default of the `DashedSentence` controller.
    pub dashed_sentence_mode: String,
    pub judgment: JudgmentOptions,
    pub practice: Vec<PracticeTrial>,
}

/// Defaults of the `Separator` controller shown between trials.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatorOptions {
    /// Milliseconds before the next trial starts.
    pub transfer: u32,
    pub normal_message: String,
    pub error_message: String,
}

/// Settings of the `AcceptabilityJudgment` controller.
#[derive(Debug, Clone, PartialEq)]
pub struct JudgmentOptions {
    /// Rating scale labels, lowest first.
    pub scale: Vec<String>,
    pub present_as_scale: bool,
    pub instructions: String,
    pub left_comment: String,
    pub right_comment: String,
    /// The judgment prompt placed on every stimulus trial.
    pub question: String,
}

/// A practice trial shown before the experiment proper.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeTrial {
    pub sentence: String,
    pub question: Option<PracticeQuestion>,
}

/// Practice questions have no correct answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeQuestion {
    pub text: String,
    pub answers: Vec<String>,
}

impl PracticeTrial {
    pub fn new(sentence: impl Into<String>) -> Self {
        PracticeTrial {
            sentence: sentence.into(),
            question: None,
        }
    }

    pub fn with_question<I, S>(mut self, text: impl Into<String>, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.question = Some(PracticeQuestion {
            text: text.into(),
            answers: answers.into_iter().map(Into::into).collect(),
        });
        self
    }
}

impl Default for IbexOptions {
    fn default() -> Self {
        IbexOptions {
            filler_prefix: "filler".to_string(),
            completion_message: "Thank you for your participation. The results were successfully \
                transmitted. Your participation code is FLYING MONKEYS."
                .to_string(),
            intro_html: "example_intro.html".to_string(),
            question_separator_message: "Get ready for the question...".to_string(),
            separator: SeparatorOptions::default(),
            dashed_sentence_mode: "self-paced reading".to_string(),
            judgment: JudgmentOptions::default(),
            practice: vec![
                PracticeTrial::new(
                    "This is a practice sentence to get you used to reading sentences like this.",
                ),
                PracticeTrial::new(
                    "This is another practice sentence with a practice question following it.",
                )
                .with_question(
                    "How would you like to answer this question?",
                    [
                        "Press 1 or click here for this answer.",
                        "Press 2 or click here for this answer.",
                        "Press 3 or click here for this answer.",
                    ],
                ),
                PracticeTrial::new(
                    "This is the last practice sentence before the experiment begins.",
                ),
            ],
        }
    }
}

impl Default for SeparatorOptions {
    fn default() -> Self {
        SeparatorOptions {
            transfer: 1000,
            normal_message: "Please wait for the next sentence.".to_string(),
            error_message: "Wrong. Please wait for the next sentence.".to_string(),
        }
    }
}

impl Default for JudgmentOptions {
    fn default() -> Self {
        JudgmentOptions {
            scale: (1..=7).map(|n| n.to_string()).collect(),
            present_as_scale: true,
            instructions: "Use number keys or click boxes to answer.".to_string(),
            left_comment: "(Bad)".to_string(),
            right_comment: "(Good)".to_string(),
            question: "How natural does this sentence sound?".to_string(),
        }
    }
}
