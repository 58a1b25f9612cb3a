//! Tolerance-banded closest-candidate search.
//!
//! Candidates are offered one at a time. The running state is the best
//! distance seen so far plus the set of candidates still considered "closest".
//! For each new candidate `x` at distance `d` from the query:
//!
//! - `d < best`: drop every kept `k` with `distance(k, x) > d + tolerance`,
//!   keep `x`, and make `d` the new best.
//! - `d == best` or `d == best + tolerance`: keep `x`.
//! - otherwise: discard `x`.
//!
//! The pruning radius is measured between the kept candidate and the new
//! best candidate, not between the kept candidate and the query. A kept
//! candidate therefore survives a better arrival when it sits close to that
//! arrival, even if it is further from the query. With `tolerance == 0` the
//! result always contains every candidate at the minimum distance, and is
//! exactly that set whenever the first candidate offered is already a closest one.
//!
//! ```rust
//! use medoid::search::closest_within;
//! use medoid::Levenshtein;
//!
//! let words = ["abc", "abd", "xyz"];
//! let kept = closest_within("abc", words.iter().copied(), &Levenshtein, 1);
//! assert_eq!(kept, vec!["abc", "abd"]);
//! ```

use crate::distance::Distance;

/// Online state of a tolerance-banded search for one query.
#[derive(Debug)]
pub struct BandedCandidates<'q, 'a, T: ?Sized, D: ?Sized> {
    query: &'q T,
    distance: &'q D,
    tolerance: usize,
    best: Option<usize>,
    kept: Vec<&'a T>,
}

impl<'q, 'a, T, D> BandedCandidates<'q, 'a, T, D>
where
    T: PartialEq + ?Sized,
    D: Distance<T> + ?Sized,
{
    /// Start an empty search around `query`.
    pub fn new(query: &'q T, distance: &'q D, tolerance: usize) -> Self {
        Self {
            query,
            distance,
            tolerance,
            best: None,
            kept: Vec::new(),
        }
    }

    /// Offer one candidate. Returns true if it was kept.
    pub fn offer(&mut self, candidate: &'a T) -> bool {
        let d = self.distance.distance(self.query, candidate);

        let Some(best) = self.best else {
            self.best = Some(d);
            self.kept.push(candidate);
            return true;
        };

        if d < best {
            let limit = d.saturating_add(self.tolerance);
            let distance = self.distance;
            self.kept
                .retain(|&kept| distance.distance(kept, candidate) <= limit);
            self.kept.push(candidate);
            self.best = Some(d);
            true
        } else if d == best || d == best.saturating_add(self.tolerance) {
            if self.kept.iter().any(|&kept| kept == candidate) {
                return false;
            }
            self.kept.push(candidate);
            true
        } else {
            false
        }
    }

    /// Best distance seen so far, `None` before the first candidate.
    pub fn best_distance(&self) -> Option<usize> {
        self.best
    }

    /// Candidates currently kept, in the order they were accepted.
    pub fn kept(&self) -> &[&'a T] {
        &self.kept
    }

    /// Finish the search.
    pub fn into_vec(self) -> Vec<&'a T> {
        self.kept
    }
}

/// Run a tolerance-banded search over `candidates` in iteration order.
///
/// Returns an empty vector when `candidates` is empty.
pub fn closest_within<'a, T, D, I>(
    query: &T,
    candidates: I,
    distance: &D,
    tolerance: usize,
) -> Vec<&'a T>
where
    T: PartialEq + ?Sized + 'a,
    D: Distance<T> + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    let mut band = BandedCandidates::new(query, distance, tolerance);
    for candidate in candidates {
        band.offer(candidate);
    }
    band.into_vec()
}
