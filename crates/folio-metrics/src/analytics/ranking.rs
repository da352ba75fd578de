//! Best and worst performer ranking.

use rust_decimal::Decimal;

/// Symbols of the best and worst performing assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Performers {
    /// Symbol with the highest return.
    pub best: String,
    /// Symbol with the lowest return.
    pub worst: String,
}

/// Ranks `(symbol, return)` pairs.
///
/// Ties resolve to the earliest entry for both ends, so a portfolio of
/// identical returns names its first asset as both best and worst.
/// Returns `None` for an empty input.
#[must_use]
pub fn rank_performers<'a, I>(entries: I) -> Option<Performers>
where
    I: IntoIterator<Item = (&'a str, Decimal)>,
{
    let mut entries = entries.into_iter();
    let first = entries.next()?;
    let (mut best, mut worst) = (first, first);

    for entry in entries {
        if entry.1 > best.1 {
            best = entry;
        }
        if entry.1 < worst.1 {
            worst = entry;
        }
    }

    Some(Performers {
        best: best.0.to_string(),
        worst: worst.0.to_string(),
    })
}
