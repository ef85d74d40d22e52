use std::collections::BTreeSet;

use letter_core::{assign_letters, assignments, summary_text, NameList, ALPHABET};

const MAX_TOTAL: usize = 40;

#[test]
fn partitions_are_disjoint_and_cover_the_alphabet() {
    for total in 1..=MAX_TOTAL {
        let mut seen = BTreeSet::new();
        let mut covered = 0;
        for index in 0..total {
            let letters = assign_letters(index, total);
            for letter in &letters {
                assert!(seen.insert(*letter), "total={total}: {letter} assigned twice");
            }
            covered += letters.len();
        }
        assert_eq!(covered, ALPHABET.len(), "total={total}");
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), ALPHABET.to_vec());
    }
}

#[test]
fn each_partition_is_in_alphabetical_order() {
    for total in 1..=MAX_TOTAL {
        for index in 0..total {
            let letters = assign_letters(index, total);
            assert!(
                letters.windows(2).all(|pair| pair[0] < pair[1]),
                "total={total} index={index}: {letters:?}"
            );
        }
    }
}

#[test]
fn partition_sizes_differ_by_at_most_one() {
    for total in 1..=MAX_TOTAL {
        let sizes: Vec<usize> = (0..total).map(|i| assign_letters(i, total).len()).collect();
        let min = sizes.iter().copied().min().unwrap_or_default();
        let max = sizes.iter().copied().max().unwrap_or_default();
        assert!(max - min <= 1, "total={total}: {sizes:?}");
        assert_eq!(min, 26 / total, "total={total}");
    }
}

#[test]
fn reordering_moves_letters_with_positions_not_names() {
    let mut list = NameList::from_names(["Alice", "Bob", "Carol"]);
    list.reorder(0, 2);

    let view = assignments(&list);
    let names: Vec<&str> = view.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Bob", "Carol", "Alice"]);
    assert_eq!(view[2].letters_label(), "C F I L O R U X");
}

#[test]
fn summary_tracks_removals() {
    let mut list = NameList::from_names(["Alice", "Bob"]);
    let bob = list.get(1).map(|entry| entry.id()).expect("bob");
    list.remove_name(bob);

    assert_eq!(
        summary_text(&list),
        "Alice - A B C D E F G H I J K L M N O P Q R S T U V W X Y Z"
    );
}

#[test]
fn assignments_serialize_to_json() {
    let list = NameList::from_names(["Alice", "Bob", "Carol"]);
    let json = serde_json::to_value(assignments(&list)).expect("serialize");

    assert_eq!(json[1]["name"], "Bob");
    assert_eq!(json[1]["letters"][0], "B");
    assert_eq!(json[2]["letters"].as_array().map(Vec::len), Some(8));
}
