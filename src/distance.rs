//! Distance oracles.
//!
//! The clustering engine never looks inside a point; everything it knows comes
//! from a [`Distance`] implementation. The contract is the usual one for a
//! dissimilarity:
//!
//! - `distance(a, a) == 0`
//! - `distance(a, b) == distance(b, a)`
//!
//! The triangle inequality is *not* required, but cluster quality degrades
//! when a distance strays far from metric behavior.
//!
//! Any `Fn(&T, &T) -> usize` is a distance, so closures work directly:
//!
//! ```rust
//! use medoid::Distance;
//!
//! let abs_diff = |a: &i64, b: &i64| a.abs_diff(*b) as usize;
//! assert_eq!(abs_diff.distance(&3, &10), 7);
//! ```

/// A symmetric, non-negative dissimilarity between two points.
pub trait Distance<T: ?Sized> {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &T, b: &T) -> usize;
}

impl<T: ?Sized, F> Distance<T> for F
where
    F: Fn(&T, &T) -> usize,
{
    #[inline]
    fn distance(&self, a: &T, b: &T) -> usize {
        self(a, b)
    }
}

/// Levenshtein (edit) distance over Unicode scalar values.
///
/// Counts the minimum number of single-character insertions, deletions and
/// substitutions needed to turn one string into the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl Levenshtein {
    /// Edit distance between two strings.
    pub fn between(a: &str, b: &str) -> usize {
        if a == b {
            return 0;
        }

        let b_chars: Vec<char> = b.chars().collect();
        if a.is_empty() {
            return b_chars.len();
        }
        if b_chars.is_empty() {
            return a.chars().count();
        }

        // Two rolling rows of the DP matrix.
        let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
        let mut curr = vec![0usize; b_chars.len() + 1];

        for (row, ca) in a.chars().enumerate() {
            curr[0] = row + 1;
            for (col, &cb) in b_chars.iter().enumerate() {
                let substitution = prev[col] + usize::from(ca != cb);
                let insertion = curr[col] + 1;
                let deletion = prev[col + 1] + 1;
                curr[col + 1] = substitution.min(insertion).min(deletion);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[b_chars.len()]
    }
}

impl Distance<str> for Levenshtein {
    #[inline]
    fn distance(&self, a: &str, b: &str) -> usize {
        Self::between(a, b)
    }
}

impl Distance<String> for Levenshtein {
    #[inline]
    fn distance(&self, a: &String, b: &String) -> usize {
        Self::between(a, b)
    }
}

impl<'a> Distance<&'a str> for Levenshtein {
    #[inline]
    fn distance(&self, a: &&'a str, b: &&'a str) -> usize {
        Self::between(a, b)
    }
}

/// Pair every point other than `point` with its distance to `point`.
///
/// Points equal to `point` are skipped. Order follows `points`.
pub fn distances_from<'a, T, D>(point: &T, points: &'a [T], distance: &D) -> Vec<(&'a T, usize)>
where
    T: PartialEq,
    D: Distance<T> + ?Sized,
{
    points
        .iter()
        .filter(|other| *other != point)
        .map(|other| (other, distance.distance(point, other)))
        .collect()
}
