use crate::names::NameList;
use crate::partition::{assignments, join_letters};

pub fn summary_line(name: &str, letters: &[char]) -> String {
    format!("{name} - {}", join_letters(letters))
}

/// One `"<name> - <letters>"` line per entry in list order, joined with `\n` and without
/// a trailing newline.
pub fn summary_text(list: &NameList) -> String {
    assignments(list)
        .iter()
        .map(|assignment| summary_line(&assignment.name, &assignment.letters))
        .collect::<Vec<_>>()
        .join("\n")
}
