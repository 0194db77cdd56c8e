//! Ibex serialization (IR → Ibex data include export)
//!
//! The layout below is what the stock Ibex controller scripts and example
//! experiments are known to load, down to line breaks and trailing spaces.
//! Keep it byte-stable: output for the same input must never change between
//! runs.

use super::js::{string_list, string_literal};
use super::{IbexOptions, PracticeTrial};
use crate::error::Result;
use crate::experiment::ExperimentType;
use crate::ir::{Question, StimulusItem};

/// Indentation of the `Separator`/`Question` continuation lines of a practice trial.
const PRACTICE_CONTINUATION: &str = "                 ";
/// Indentation of the options inside a practice `Question`.
const PRACTICE_QUESTION_FIELD: &str = "                              ";
/// Indentation of the second and later practice answers.
const PRACTICE_ANSWER: &str = "                                   ";

/// Serialize stimulus items to a complete Ibex data include
///
/// Every item becomes exactly one trial, in the order given.
pub fn serialize_to_ibex(
    items: &[StimulusItem],
    experiment: ExperimentType,
    options: &IbexOptions,
) -> Result<String> {
    tracing::debug!(
        items = items.len(),
        experiment = experiment.name(),
        "rendering ibex data include"
    );

    let trials = items
        .iter()
        .map(|item| render_trial(item, experiment, options))
        .collect::<Result<Vec<_>>>()?;

    let mut output = render_header(&condition_labels(items), options)?;
    output.push_str(&render_preamble_items(experiment, options)?);
    output.push_str("\n    ");
    output.push_str(&trials.join(","));
    output.push_str("\n];\n");
    Ok(output)
}

/// Distinct condition labels in order of first appearance.
pub fn condition_labels(items: &[StimulusItem]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for item in items {
        let label = item.header.label();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

/// Render one stimulus trial.
pub fn render_trial(
    item: &StimulusItem,
    experiment: ExperimentType,
    options: &IbexOptions,
) -> Result<String> {
    let label = string_literal(&item.header.label())?;
    let spec = if item.header.is_filler(&options.filler_prefix) {
        label
    } else {
        format!("[{label}, {}]", item.header.item)
    };

    let questions = item
        .questions
        .iter()
        .map(render_question)
        .collect::<Result<Vec<_>>>()?
        .join(", ");

    Ok(format!(
        "\n[{spec}, {controller}, {body}, \n\"Separator\", {{normalMessage: {separator}}}, {questions}]\n",
        controller = string_literal(experiment.name())?,
        body = render_body(&item.sentence(), experiment, options)?,
        separator = string_literal(&options.question_separator_message)?,
    ))
}

/// The controller options of a trial: the sentence, plus the judgment
/// prompt for acceptability judgments.
fn render_body(
    sentence: &str,
    experiment: ExperimentType,
    options: &IbexOptions,
) -> Result<String> {
    let sentence = string_literal(sentence)?;
    Ok(match experiment {
        ExperimentType::DashedSentence => format!("{{s: {sentence}}}"),
        ExperimentType::AcceptabilityJudgment => format!(
            "{{s: {sentence}, q: {question}}}",
            question = string_literal(&options.judgment.question)?
        ),
    })
}

fn render_question(question: &Question) -> Result<String> {
    Ok(format!(
        "\n\"Question\", {{q: {text}, as: [{answers}]}}\n",
        text = string_literal(&question.text)?,
        answers = string_list(&question.answers(), ", ")?,
    ))
}

/// Everything up to and including the opening of the `items` array.
fn render_header(conditions: &[String], options: &IbexOptions) -> Result<String> {
    let separator = &options.separator;
    let judgment = &options.judgment;

    let mut out = String::new();
    out.push_str(&format!(
        "var shuffleSequence = seq(\"intro\", sepWith(\"sep\", seq(\"practice\", rshuffle({}))))\n",
        string_list(conditions, ", ")?
    ));
    out.push_str("var practiceItemTypes = [\"practice\"];\n\n");

    out.push_str("var defaults = [\n");
    out.push_str(&format!(
        "    \"Separator\", {{\n        transfer: {},\n        normalMessage: {},\n        errorMessage: {}\n    }},\n",
        separator.transfer,
        string_literal(&separator.normal_message)?,
        string_literal(&separator.error_message)?,
    ));
    out.push_str(&format!(
        "    \"DashedSentence\", {{\n        mode: {}\n    }},\n",
        string_literal(&options.dashed_sentence_mode)?
    ));
    out.push_str(&format!(
        "    \"AcceptabilityJudgment\", {{\n        as: [{}],\n        presentAsScale: {},\n        instructions: {},\n        leftComment: {}, rightComment: {}\n    }},\n",
        string_list(&judgment.scale, ", ")?,
        judgment.present_as_scale,
        string_literal(&judgment.instructions)?,
        string_literal(&judgment.left_comment)?,
        string_literal(&judgment.right_comment)?,
    ));
    out.push_str("    \"Question\", {\n        hasCorrect: true\n    },\n");
    out.push_str("    \"Message\", {\n        hideProgressBar: true\n    },\n");
    out.push_str(
        "    \"Form\", {\n        hideProgressBar: true,\n        continueOnReturn: true,\n        saveReactionTime: true\n    }\n",
    );
    out.push_str("];\n\n");

    out.push_str(&format!(
        "var completionMessage = {}\n",
        string_literal(&options.completion_message)?
    ));
    out.push_str("var items = [\n");
    Ok(out)
}

/// Separator, counter, intro form and practice trials.
fn render_preamble_items(experiment: ExperimentType, options: &IbexOptions) -> Result<String> {
    let mut out = String::new();
    out.push_str("  [\"sep\", \"Separator\", { }],\n");
    out.push_str("  [\"setcounter\", \"__SetCounter__\", { }],\n");
    out.push_str("  [\"intro\", \"Form\", {\n");
    out.push_str(&format!(
        "    html: {{ include: {} }},\n",
        string_literal(&options.intro_html)?
    ));
    out.push_str("    validators: {\n");
    out.push_str("      age: function (s) { if (s.match(/^\\d+$/)) return true; \n");
    out.push_str(
        "                           else return \"Bad value for \u{2018}age\u{2019}\"; }\n",
    );
    out.push_str("      }\n");
    out.push_str("  } ],\n");

    for trial in &options.practice {
        out.push_str(&render_practice(trial, experiment, options)?);
    }
    Ok(out)
}

fn render_practice(
    trial: &PracticeTrial,
    experiment: ExperimentType,
    options: &IbexOptions,
) -> Result<String> {
    let mut out = format!(
        "    [\"practice\", {}, \n     {}",
        string_literal(experiment.name())?,
        render_body(&trial.sentence, experiment, options)?
    );

    if let Some(question) = &trial.question {
        let answer_separator = format!(",\n{PRACTICE_ANSWER}");
        out.push_str(&format!(
            ",\n{PRACTICE_CONTINUATION}\"Separator\", {{normalMessage: {}}},\n",
            string_literal(&options.question_separator_message)?
        ));
        out.push_str(&format!(
            "{PRACTICE_CONTINUATION}\"Question\", {{hasCorrect: false, randomOrder: false,\n"
        ));
        out.push_str(&format!(
            "{PRACTICE_QUESTION_FIELD}q: {},\n",
            string_literal(&question.text)?
        ));
        out.push_str(&format!(
            "{PRACTICE_QUESTION_FIELD}as: [{}]}}",
            string_list(&question.answers, &answer_separator)?
        ));
    }

    out.push_str("],\n");
    Ok(out)
}
