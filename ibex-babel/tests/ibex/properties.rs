//! Property tests: item count and order survive conversion

use crate::common::linger_source;
use ibex_babel::formats::ibex::serializer::condition_labels;
use ibex_babel::formats::linger::parse_linger;
use ibex_babel::{convert, ExperimentType, IbexOptions};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z][a-z]{0,7}[.,]?"
}

fn item_row() -> impl Strategy<Value = (String, i64, String, Vec<String>)> {
    (
        "(exp|filler|rc)[0-9]?",
        0i64..500,
        "[a-d]",
        prop::collection::vec(word(), 1..8),
    )
}

proptest! {
    #[test]
    fn every_item_becomes_one_trial_in_order(rows in prop::collection::vec(item_row(), 0..20)) {
        let source = linger_source(&rows);
        let options = IbexOptions::default();

        let items = parse_linger(&source).unwrap();
        prop_assert_eq!(items.len(), rows.len());

        for experiment in ExperimentType::ALL {
            let output = convert(&source, experiment, &options).unwrap();
            let stimuli = &output[output.find("],\n\n    ").unwrap()..];

            let marker = format!("\"{}\", {{s: ", experiment.name());
            prop_assert_eq!(stimuli.matches(&marker).count(), rows.len());

            let mut cursor = 0;
            for (_, _, _, words) in &rows {
                let sentence = format!("{{s: \"{}\"", words.join(" "));
                let found = stimuli[cursor..].find(&sentence);
                prop_assert!(found.is_some(), "missing or out of order: {}", sentence);
                cursor += found.unwrap() + sentence.len();
            }
        }
    }

    #[test]
    fn condition_labels_are_distinct(rows in prop::collection::vec(item_row(), 0..20)) {
        let items = parse_linger(&linger_source(&rows)).unwrap();
        let labels = condition_labels(&items);

        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), labels.len());
        for item in &items {
            prop_assert!(labels.contains(&item.header.label()));
        }
    }
}
