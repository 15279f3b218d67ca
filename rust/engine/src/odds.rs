//! Closed-form keno odds for a 20-of-80 draw.

use crate::draw::{DRAW_COUNT, TOTAL_NUMBERS};
use crate::paytable::Paytable;

fn choose(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * f64::from(n - i) / f64::from(i + 1))
}

/// Probability that a card with `spots` picks hits exactly `hits` numbers.
pub fn hit_probability(spots: u8, hits: u8) -> f64 {
    let total = u32::from(TOTAL_NUMBERS);
    let drawn = u32::from(DRAW_COUNT);
    let spots = u32::from(spots);
    let hits = u32::from(hits);
    if hits > spots || hits > drawn || spots > total {
        return 0.0;
    }
    choose(spots, hits) * choose(total - spots, drawn - hits) / choose(total, drawn)
}

/// Long-run payout per unit bet for a spot count under `table`.
pub fn expected_return(table: &Paytable, spots: u8) -> f64 {
    table
        .row(spots)
        .map(|row| {
            row.iter()
                .map(|(&hits, &mult)| hit_probability(spots, hits) * f64::from(mult))
                .sum()
        })
        .unwrap_or(0.0)
}
