//! Export tests for Ibex format (Linger → Ibex)
//!
//! The reference fixture is the byte-exact output Ibex is known to load.

use crate::common::load_fixture;
use ibex_babel::formats::ibex::serializer::render_trial;
use ibex_babel::formats::linger::parse_linger;
use ibex_babel::{convert, ExperimentType, IbexOptions};
use insta::assert_snapshot;

#[test]
fn test_dashed_sentence_matches_reference_output() {
    let source = load_fixture("three-items.txt");
    let expected = load_fixture("three-items.dashed.js");

    let options = IbexOptions::default();
    let output = convert(&source, ExperimentType::DashedSentence, &options).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_acceptability_judgment_differs_only_in_trial_shape() {
    let source = load_fixture("three-items.txt");
    let options = IbexOptions::default();

    let dashed = convert(&source, ExperimentType::DashedSentence, &options).unwrap();
    let judged = convert(&source, ExperimentType::AcceptabilityJudgment, &options).unwrap();
    assert_ne!(dashed, judged);

    let normalized = judged
        .replace("\"AcceptabilityJudgment\", {s:", "\"DashedSentence\", {s:")
        .replace(
            "\"practice\", \"AcceptabilityJudgment\"",
            "\"practice\", \"DashedSentence\"",
        )
        .replace(", q: \"How natural does this sentence sound?\"}", "}");
    assert_eq!(normalized, dashed);
}

#[test]
fn test_conversion_is_idempotent() {
    let source = load_fixture("three-items.txt");
    let options = IbexOptions::default();

    for experiment in ExperimentType::ALL {
        let first = convert(&source, experiment, &options).unwrap();
        let second = convert(&source, experiment, &options).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_malformed_input_produces_no_output() {
    let source = load_fixture("malformed-answer.txt");
    let options = IbexOptions::default();
    let result = convert(&source, ExperimentType::DashedSentence, &options);
    assert!(result.is_err());
}

#[test]
fn test_two_dog_items_render_joined_sentences() {
    let source = load_fixture("two-items.txt");
    let options = IbexOptions::default();
    let output = convert(&source, ExperimentType::DashedSentence, &options).unwrap();

    assert_eq!(output.matches("{s: \"The dog ran.\"}").count(), 2);
    let first = output.find("[[\"spr_a\", 1]").unwrap();
    let second = output.find("[[\"spr_a\", 2]").unwrap();
    assert!(first < second);
}

#[test]
fn test_trial_snapshots() {
    let items = parse_linger("# filler 4 z\nA short  filler.\n").unwrap();
    let options = IbexOptions::default();

    let dashed = render_trial(&items[0], ExperimentType::DashedSentence, &options).unwrap();
    assert_snapshot!(
        dashed.lines().nth(1).unwrap().trim_end(),
        @r#"["filler_z", "DashedSentence", {s: "A short filler."},"#
    );

    let judged = render_trial(&items[0], ExperimentType::AcceptabilityJudgment, &options).unwrap();
    assert_snapshot!(
        judged.lines().nth(1).unwrap().trim_end(),
        @r#"["filler_z", "AcceptabilityJudgment", {s: "A short filler.", q: "How natural does this sentence sound?"},"#
    );
}

#[test]
fn test_header_snapshot() {
    let source = load_fixture("three-items.txt");
    let options = IbexOptions::default();
    let output = convert(&source, ExperimentType::DashedSentence, &options).unwrap();

    assert_snapshot!(
        output.lines().next().unwrap(),
        @r#"var shuffleSequence = seq("intro", sepWith("sep", seq("practice", rshuffle("exp_a", "exp_b", "filler_x"))))"#
    );
}
