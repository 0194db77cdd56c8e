//! Linger parsing (Linger → IR import)
//!
//! Pipeline: source lines → item groups → [`StimulusItem`]s.
//!
//! Parsing is all or nothing. The first malformed line aborts with a
//! [`ConvertError::Parse`] carrying its line number, so a broken file never
//! turns into a silently truncated experiment.

use crate::error::{ConvertError, Result};
use crate::ir::{Answer, ItemHeader, Question, StimulusItem};

const HEADER_PREFIX: &str = "# ";
const QUESTION_PREFIX: &str = "? ";

/// A trimmed source line with its 1-based line number.
#[derive(Debug, Clone, Copy)]
struct SourceLine<'a> {
    number: usize,
    text: &'a str,
}

/// The lines of one item: its header and everything up to the next item.
#[derive(Debug)]
struct ItemLines<'a> {
    header: SourceLine<'a>,
    body: Vec<SourceLine<'a>>,
}

/// Parse Linger source into stimulus items, in source order
pub fn parse_linger(source: &str) -> Result<Vec<StimulusItem>> {
    let groups = group_items(source)?;
    tracing::debug!(items = groups.len(), "grouped linger items");
    groups.iter().map(parse_item).collect()
}

/// Split the source into per-item line groups.
///
/// A header line always opens a new group; a blank line closes the current
/// one. Every other line must belong to an open group.
fn group_items(source: &str) -> Result<Vec<ItemLines<'_>>> {
    let mut groups = Vec::new();
    let mut current: Option<ItemLines<'_>> = None;

    for (index, raw) in source.lines().enumerate() {
        let line = SourceLine {
            number: index + 1,
            text: raw.trim(),
        };

        if line.text.is_empty() {
            groups.extend(current.take());
            continue;
        }

        if line.text.starts_with(HEADER_PREFIX) {
            let opened = ItemLines {
                header: line,
                body: Vec::new(),
            };
            groups.extend(current.replace(opened));
            continue;
        }

        match current.as_mut() {
            Some(group) => group.body.push(line),
            None => {
                return Err(ConvertError::parse(
                    line.number,
                    line.text,
                    format!("expected an item header starting with '{HEADER_PREFIX}'"),
                ))
            }
        }
    }

    groups.extend(current);
    Ok(groups)
}

fn parse_item(group: &ItemLines<'_>) -> Result<StimulusItem> {
    let header = parse_header(&group.header)?;

    let (sentence_line, question_lines) = group.body.split_first().ok_or_else(|| {
        ConvertError::parse(
            group.header.number,
            group.header.text,
            "item has no sentence line",
        )
    })?;

    let segments = sentence_line
        .text
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let questions = question_lines
        .iter()
        .map(parse_question)
        .collect::<Result<Vec<_>>>()?;

    Ok(StimulusItem {
        header,
        segments,
        questions,
        line: group.header.number,
    })
}

fn parse_header(line: &SourceLine<'_>) -> Result<ItemHeader> {
    let mut fields = line.text[HEADER_PREFIX.len()..].split_whitespace();

    let (Some(experiment), Some(item), Some(condition)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(ConvertError::parse(
            line.number,
            line.text,
            "item header needs an experiment, an item number and a condition",
        ));
    };

    let item = item.parse::<i64>().map_err(|_| {
        ConvertError::parse(
            line.number,
            line.text,
            format!("item number '{item}' is not an integer"),
        )
    })?;

    let rest: Vec<String> = fields.map(str::to_string).collect();
    if !rest.is_empty() {
        tracing::debug!(line = line.number, ?rest, "ignoring trailing header fields");
    }

    Ok(ItemHeader {
        experiment: experiment.to_string(),
        item,
        condition: condition.to_string(),
        rest,
    })
}

fn parse_question(line: &SourceLine<'_>) -> Result<Question> {
    let body = line.text.strip_prefix(QUESTION_PREFIX).ok_or_else(|| {
        ConvertError::parse(
            line.number,
            line.text,
            format!("expected a question starting with '{QUESTION_PREFIX}'"),
        )
    })?;
    let body = body.trim();

    let (text, answer) = body.rsplit_once(char::is_whitespace).ok_or_else(|| {
        ConvertError::parse(
            line.number,
            line.text,
            "question needs text followed by an answer (Y or N)",
        )
    })?;

    let correct = Answer::from_token(answer).ok_or_else(|| {
        ConvertError::parse(
            line.number,
            line.text,
            format!("unknown answer '{answer}' (expected Y, Yes, N or No)"),
        )
    })?;

    Ok(Question {
        text: text.trim_end().to_string(),
        correct,
    })
}
