//! Background colour selection by sample frequency.

use std::collections::HashMap;

use crate::colour::Colour;
use crate::error::{PxGridError, Result};

/// Outcome of background selection, kept for diagnostic reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundSummary {
    /// The most frequent sampled colour.
    pub colour: Colour,

    /// How many samples matched it.
    pub frequency: usize,

    /// Total samples examined.
    pub total: usize,
}

/// Pick the most frequent colour from a sample stream.
///
/// Ties between equal-maximum counts go to the colour whose first occurrence
/// comes earliest in the stream: the final scan walks colours in
/// first-encounter order and only replaces the current best on a strictly
/// greater count.
///
/// # Errors
///
/// `EmptySample` if the stream yields nothing; callers decide the fallback
/// colour rather than this function inventing one.
pub fn select_background<I>(colours: I) -> Result<BackgroundSummary>
where
    I: IntoIterator<Item = Colour>,
{
    let mut counts: HashMap<Colour, usize> = HashMap::new();
    let mut order: Vec<Colour> = Vec::new();
    let mut total = 0usize;

    for colour in colours {
        total += 1;
        let count = counts.entry(colour).or_insert(0);
        if *count == 0 {
            order.push(colour);
        }
        *count += 1;
    }

    let mut best: Option<(Colour, usize)> = None;
    for colour in order {
        let count = counts.get(&colour).copied().unwrap_or(0);
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((colour, count));
        }
    }

    best.map(|(colour, frequency)| BackgroundSummary {
        colour,
        frequency,
        total,
    })
    .ok_or(PxGridError::EmptySample)
}
