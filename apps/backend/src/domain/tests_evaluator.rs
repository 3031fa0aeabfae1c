use super::card::{Card, Cell};
use super::evaluator::{evaluate, DrawnNumbers, LabeledCard, PatternHit, WinResult};

/// Card with cell (r, c) = 1 + 15c + r, FREE at (2, 2):
///
///   1  16  31  46  61
///   2  17  32  47  62
///   3  18   *  48  63
///   4  19  34  49  64
///   5  20  35  50  65
fn fixture_card() -> Card {
    let rows = (0..5)
        .map(|r| {
            (0..5)
                .map(|c| {
                    if (r, c) == (2, 2) {
                        Cell::Free
                    } else {
                        Cell::Number((1 + 15 * c + r) as u8)
                    }
                })
                .collect()
        })
        .collect();
    Card::from_rows(rows).unwrap()
}

fn labeled(label: &str) -> LabeledCard {
    LabeledCard {
        label: label.to_string(),
        card: fixture_card(),
    }
}

fn drawn_of(values: &[u8]) -> DrawnNumbers {
    values.iter().map(|v| v.to_string()).collect()
}

fn all_values() -> Vec<u8> {
    fixture_card()
        .cells()
        .filter_map(|cell| match cell {
            Cell::Number(n) => Some(n),
            Cell::Free => None,
        })
        .collect()
}

#[test]
fn full_card_wins_full_and_is_not_hot_or_warm() {
    let result = evaluate(&drawn_of(&all_values()), &[labeled("1")]);

    assert_eq!(result.full_cards, vec!["1".to_string()]);
    assert_eq!(result.status.hot, 0);
    assert_eq!(result.status.warm, 0);
}

#[test]
fn one_missing_number_counts_hot_not_full() {
    let mut values = all_values();
    values.pop();
    let result = evaluate(&drawn_of(&values), &[labeled("1")]);

    assert!(result.full_cards.is_empty());
    assert_eq!(result.status.hot, 1);
    assert_eq!(result.status.warm, 0);
}

#[test]
fn two_missing_numbers_count_warm_only() {
    let mut values = all_values();
    values.pop();
    values.pop();
    let result = evaluate(&drawn_of(&values), &[labeled("1")]);

    assert!(result.full_cards.is_empty());
    assert_eq!(result.status.hot, 0);
    assert_eq!(result.status.warm, 1);
}

#[test]
fn three_missing_numbers_count_nothing() {
    let values = &all_values()[..21];
    let result = evaluate(&drawn_of(values), &[labeled("1")]);

    assert_eq!(result.status.hot, 0);
    assert_eq!(result.status.warm, 0);
}

#[test]
fn corners_only_yields_corners_and_nothing_else() {
    // The four grid corners of the fixture card.
    let result = evaluate(&drawn_of(&[1, 61, 5, 65]), &[labeled("7")]);

    assert_eq!(result.four_corners, vec!["7".to_string()]);
    assert!(result.rows.is_empty());
    assert!(result.columns.is_empty());
    assert!(result.diagonals.is_empty());
    assert!(result.full_cards.is_empty());
    assert_eq!(result.status, Default::default());
}

#[test]
fn complete_row_is_reported_with_one_based_index() {
    // Row 3 passes through FREE, so four numbers complete it.
    let result = evaluate(&drawn_of(&[3, 18, 48, 63]), &[labeled("2")]);

    assert_eq!(
        result.rows,
        vec![PatternHit {
            label: "2".to_string(),
            position: "Row 3".to_string(),
        }]
    );
    assert!(result.columns.is_empty());
    assert!(result.four_corners.is_empty());
}

#[test]
fn complete_column_uses_the_literal_letter_offset() {
    // Column 0 complete. The letters run 'A' + index, not B-I-N-G-O;
    // changing this is a product decision, so the test pins it.
    let result = evaluate(&drawn_of(&[1, 2, 3, 4, 5]), &[labeled("2")]);

    assert_eq!(
        result.columns,
        vec![PatternHit {
            label: "2".to_string(),
            position: "Column A".to_string(),
        }]
    );
}

#[test]
fn both_diagonals_are_checked_independently() {
    // Main diagonal: 1, 17, FREE, 49, 65. Anti: 61, 47, FREE, 19, 5.
    let main = evaluate(&drawn_of(&[1, 17, 49, 65]), &[labeled("3")]);
    assert_eq!(main.diagonals.len(), 1);
    assert_eq!(main.diagonals[0].position, "Main Diagonal");

    let anti = evaluate(&drawn_of(&[61, 47, 19, 5]), &[labeled("3")]);
    assert_eq!(anti.diagonals.len(), 1);
    assert_eq!(anti.diagonals[0].position, "Secondary Diagonal");
}

#[test]
fn textual_and_numeric_tokens_hit_the_same_cells() {
    let numeric: Vec<serde_json::Value> =
        vec![1.into(), 2.into(), 3.into(), 4.into(), 5.into()];
    let textual: Vec<serde_json::Value> = ["1", "2", "3", "4", "5"]
        .iter()
        .map(|s| serde_json::Value::String(s.to_string()))
        .collect();

    let from_numbers = DrawnNumbers::from_tokens(&numeric).unwrap();
    let from_strings = DrawnNumbers::from_tokens(&textual).unwrap();

    let a = evaluate(&from_numbers, &[labeled("1")]);
    let b = evaluate(&from_strings, &[labeled("1")]);
    assert_eq!(a, b);
    assert_eq!(a.columns.len(), 1);
}

#[test]
fn non_token_draw_input_is_rejected() {
    let bad = vec![serde_json::json!([1, 2])];
    assert!(DrawnNumbers::from_tokens(&bad).is_err());

    let ok = vec![serde_json::json!(12), serde_json::json!("31")];
    let drawn = DrawnNumbers::from_tokens(&ok).unwrap();
    assert_eq!(drawn.len(), 2);
}

#[test]
fn checks_are_independent_and_non_exclusive() {
    // Corners plus all of row 1: the card is simultaneously a corner
    // winner and a row winner without being full.
    let result = evaluate(&drawn_of(&[1, 16, 31, 46, 61, 5, 65]), &[labeled("4")]);

    assert_eq!(result.four_corners, vec!["4".to_string()]);
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].position, "Row 1");
    assert!(result.full_cards.is_empty());
}

#[test]
fn evaluation_is_idempotent() {
    let drawn = drawn_of(&all_values()[..20]);
    let cards = vec![labeled("1"), labeled("2")];

    let first = evaluate(&drawn, &cards);
    let second = evaluate(&drawn, &cards);
    assert_eq!(first, second);
}

#[test]
fn multiple_cards_aggregate_counters() {
    let mut values = all_values();
    values.pop();
    // Same drawn set, two identical one-short cards.
    let result = evaluate(&drawn_of(&values), &[labeled("1"), labeled("2")]);
    assert_eq!(result.status.hot, 2);
}

#[test]
fn empty_inputs_yield_empty_result() {
    let drawn = drawn_of(&[]);
    assert!(drawn.is_empty());
    assert_eq!(evaluate(&drawn, &[]), WinResult::default());
}
