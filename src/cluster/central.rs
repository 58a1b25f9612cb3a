//! Central-point (medoid) search.
//!
//! The central point of a set is the member minimizing the sum of distances to
//! every other member. Finding it is O(n²) distance evaluations, which dominates
//! the cost of building an index, so the scan is split into contiguous blocks
//! that run on the rayon pool.
//!
//! ## Blocking
//!
//! The block count is `min(available_parallelism, ceil(n / min_points_per_task))`.
//! Small inputs therefore run inline on the calling thread. Each block scans
//! its own members against the whole set and keeps a local minimum; the local
//! minima come back in block order and are reduced sequentially.
//!
//! ## Ties
//!
//! Equal sums resolve to the earliest member in input order. Blocks are
//! contiguous and reduced in order with a strict comparison, so the answer does
//! not depend on how many blocks were used or which finished first.

use rayon::prelude::*;

use crate::distance::Distance;

/// Default minimum number of points handed to one parallel task.
pub const DEFAULT_MIN_POINTS_PER_TASK: usize = 25;

/// Index of the central point of `points`, or `None` when `points` is empty.
///
/// ```rust
/// use medoid::cluster::central_point;
/// use medoid::Levenshtein;
///
/// let words = ["cat", "cap", "bat", "rat"];
/// assert_eq!(central_point(&words, &Levenshtein, 25), Some(0));
/// ```
pub fn central_point<T, D>(points: &[T], distance: &D, min_points_per_task: usize) -> Option<usize>
where
    T: Sync,
    D: Distance<T> + Sync + ?Sized,
{
    let members: Vec<usize> = (0..points.len()).collect();
    central_member(points, &members, distance, min_points_per_task)
}

/// Central point of the subset `members` (indices into `points`).
///
/// Returns an index into `points`, not a position in `members`.
pub(crate) fn central_member<T, D>(
    points: &[T],
    members: &[usize],
    distance: &D,
    min_points_per_task: usize,
) -> Option<usize>
where
    T: Sync,
    D: Distance<T> + Sync + ?Sized,
{
    let n = members.len();
    if n == 0 {
        return None;
    }

    let tasks = task_count(n, min_points_per_task);
    if tasks <= 1 {
        return scan_block(points, members, members, distance).map(|(idx, _)| idx);
    }

    let block_size = n.div_ceil(tasks);
    log::trace!("central point search: {n} points in blocks of {block_size}");

    // Indexed collect keeps block order.
    let block_minima: Vec<Option<(usize, usize)>> = members
        .par_chunks(block_size)
        .map(|block| scan_block(points, block, members, distance))
        .collect();

    block_minima
        .into_iter()
        .flatten()
        .reduce(|best, cand| if cand.1 < best.1 { cand } else { best })
        .map(|(idx, _)| idx)
}

/// Number of blocks to split `n` points into.
pub(crate) fn task_count(n: usize, min_points_per_task: usize) -> usize {
    let hardware = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(2);
    let by_size = n.div_ceil(min_points_per_task.max(1));
    hardware.min(by_size).max(1)
}

/// Sum of distances from `points[idx]` to every member.
#[inline]
pub(crate) fn sum_of_distances<T, D>(points: &[T], idx: usize, members: &[usize], distance: &D) -> usize
where
    D: Distance<T> + ?Sized,
{
    let p = &points[idx];
    members
        .iter()
        .map(|&j| distance.distance(p, &points[j]))
        .fold(0usize, |acc, d| acc.saturating_add(d))
}

/// Local minimum `(index, sum)` over `block`, first-found on ties.
fn scan_block<T, D>(points: &[T], block: &[usize], members: &[usize], distance: &D) -> Option<(usize, usize)>
where
    D: Distance<T> + ?Sized,
{
    let mut best: Option<(usize, usize)> = None;
    for &idx in block {
        let sum = sum_of_distances(points, idx, members, distance);
        match best {
            Some((_, best_sum)) if sum >= best_sum => {}
            _ => best = Some((idx, sum)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Levenshtein;

    fn brute_force<T, D: Distance<T>>(points: &[T], distance: &D) -> usize {
        let members: Vec<usize> = (0..points.len()).collect();
        let sums: Vec<usize> = (0..points.len())
            .map(|i| sum_of_distances(points, i, &members, distance))
            .collect();
        let min = *sums.iter().min().unwrap();
        sums.iter().position(|&s| s == min).unwrap()
    }

    #[test]
    fn small_word_set() {
        // Sums: cat=3, cap=5, bat=4, rat=4.
        let words = ["cat", "cap", "bat", "rat"];
        assert_eq!(central_point(&words, &Levenshtein, 25), Some(0));
        assert_eq!(brute_force(&words, &Levenshtein), 0);
    }

    #[test]
    fn empty_input_has_no_center() {
        let words: [&str; 0] = [];
        assert_eq!(central_point(&words, &Levenshtein, 25), None);
    }

    #[test]
    fn single_point_is_its_own_center() {
        let words = ["alone"];
        assert_eq!(central_point(&words, &Levenshtein, 25), Some(0));
    }

    #[test]
    fn parallel_matches_sequential() {
        let data: Vec<i64> = (0..200).map(|i| (i * 37) % 101).collect();
        let dist = |a: &i64, b: &i64| a.abs_diff(*b) as usize;

        let sequential = central_point(&data, &dist, usize::MAX).unwrap();
        let parallel = central_point(&data, &dist, 1).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential, brute_force(&data, &dist));
    }

    #[test]
    fn ties_resolve_to_first_in_input_order() {
        // Discrete metric: every sum is n - 1.
        let data: Vec<u32> = (0..64).collect();
        let discrete = |a: &u32, b: &u32| usize::from(a != b);

        for min_per_task in [1, 3, 16, 1000] {
            assert_eq!(central_point(&data, &discrete, min_per_task), Some(0));
        }
    }

    #[test]
    fn member_subset_returns_index_into_points() {
        let words = ["zzzzzz", "cat", "cap", "bat", "rat"];
        let members = [1, 2, 3, 4];
        assert_eq!(central_member(&words, &members, &Levenshtein, 1), Some(1));
    }

    #[test]
    fn huge_distances_saturate() {
        let data = [0u64, 1, 2];
        let far = |a: &u64, b: &u64| if a == b { 0 } else { usize::MAX / 2 + 1 };
        assert_eq!(central_point(&data, &far, 25), Some(0));
        assert_eq!(central_point(&data, &far, 1), Some(0));
    }

    #[test]
    fn task_count_bounds() {
        assert_eq!(task_count(1, 25), 1);
        assert_eq!(task_count(25, 25), 1);
        assert!(task_count(26, 25) <= 2);
        assert!(task_count(10_000, 25) >= 1);
        // Zero is treated as one point per task rather than dividing by zero.
        assert!(task_count(10, 0) >= 1);
    }
}
