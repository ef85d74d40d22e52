//! Round-robin partition of the alphabet across the names in a list.

use serde::Serialize;

use crate::domain::NameId;
use crate::names::NameList;

pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Letters owned by the name at `index` when `total` names share the alphabet: every
/// letter whose position `p` satisfies `p % total == index`, in alphabetical order.
pub fn assign_letters(index: usize, total: usize) -> Vec<char> {
    if total == 0 {
        return Vec::new();
    }
    ALPHABET
        .iter()
        .enumerate()
        .filter(|(position, _)| position % total == index)
        .map(|(_, letter)| *letter)
        .collect()
}

pub fn letters_label(index: usize, total: usize) -> String {
    join_letters(&assign_letters(index, total))
}

pub(crate) fn join_letters(letters: &[char]) -> String {
    let mut out = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*letter);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub id: NameId,
    pub name: String,
    pub letters: Vec<char>,
}

impl Assignment {
    pub fn letters_label(&self) -> String {
        join_letters(&self.letters)
    }
}

/// Derived view of `list`. Computed on demand so it can never go stale against the
/// list it came from.
pub fn assignments(list: &NameList) -> Vec<Assignment> {
    let total = list.len();
    list.iter()
        .enumerate()
        .map(|(index, entry)| Assignment {
            id: entry.id(),
            name: entry.name().to_string(),
            letters: assign_letters(index, total),
        })
        .collect()
}
