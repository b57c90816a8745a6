//! The Life transition rule.

/// Next value of a cell given its current value and live-neighbor sum.
///
/// Survival on 2 or 3 neighbors, birth on exactly 3, death otherwise.
///
/// # Panics
///
/// A value outside {0, 1} or a sum outside `0..=8` means a broken neighbor
/// computation upstream; that is a bug, not input, so this panics instead of
/// producing a plausible wrong answer.
pub fn next_value(value: u8, sum: u8) -> u8 {
    assert!(value <= 1, "cell value out of range: {value}");
    assert!(sum <= 8, "neighbor sum out of range: {sum}");
    match (value, sum) {
        (1, 2) | (1, 3) => 1, // survival
        (0, 3) => 1,          // birth
        _ => 0,               // isolation, overcrowding, or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_survives_on_two_or_three() {
        for sum in 0..=8 {
            let expected = u8::from(sum == 2 || sum == 3);
            assert_eq!(next_value(1, sum), expected, "live cell, sum {sum}");
        }
    }

    #[test]
    fn dead_cell_born_on_exactly_three() {
        for sum in 0..=8 {
            let expected = u8::from(sum == 3);
            assert_eq!(next_value(0, sum), expected, "dead cell, sum {sum}");
        }
    }

    #[test]
    #[should_panic(expected = "neighbor sum out of range")]
    fn oversized_sum_panics() {
        next_value(0, 9);
    }

    #[test]
    #[should_panic(expected = "cell value out of range")]
    fn oversized_value_panics() {
        next_value(2, 3);
    }
}
