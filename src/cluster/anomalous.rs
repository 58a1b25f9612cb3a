//! Anomalous-pattern initialization.
//!
//! Discovers medoids without being told how many clusters to form.
//!
//! # The Algorithm
//!
//! 1. Compute the central point of the whole set once; call it the *anchor*.
//! 2. While points remain:
//!    - take the remaining point furthest from the anchor,
//!    - split the remaining points into "nearer the anchor" and "nearer the
//!      furthest point" (ties go to the far side),
//!    - replace the furthest point with the central point of its side and
//!      split again, until the central point stops moving,
//!    - peel the far side off as one cluster, its central point becoming a
//!      medoid.
//!
//! Each round removes at least the medoid itself, so the outer loop always
//! terminates. The inner fixed-point search has no proven bound for arbitrary
//! distances and is capped by `max_iter`.
//!
//! ## References
//!
//! Mirkin, B. (2005). "Clustering for Data Mining: A Data Recovery Approach."
//! Chapman & Hall/CRC. (Section on anomalous pattern clustering.)

use super::central::{central_member, central_point};
use super::util::{far_side, furthest_from};
use crate::distance::Distance;
use crate::error::{Error, Result};

/// Medoids discovered by anomalous-pattern initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MedoidSet {
    /// Index of the central point of the whole input, used as the anchor for every split.
    pub anchor: usize,

    /// Medoid indices in discovery order.
    pub medoids: Vec<usize>,
}

/// One peeled-off cluster: a stable medoid and the far-side members around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Split {
    pub(crate) medoid: usize,
    pub(crate) members: Vec<usize>,
    pub(crate) iterations: usize,
}

/// Find one medoid far from `anchor` among `remaining`.
pub(crate) fn split_off<T, D>(
    points: &[T],
    anchor: usize,
    remaining: &[usize],
    distance: &D,
    min_points_per_task: usize,
    max_iter: usize,
) -> Result<Split>
where
    T: Sync,
    D: Distance<T> + Sync + ?Sized,
{
    let mut far = furthest_from(points, anchor, remaining, distance).ok_or(Error::EmptyInput)?;
    let mut members = far_side(points, anchor, far, remaining, distance);

    for iteration in 1..=max_iter {
        // `far` is always on its own side, so `members` is never empty here.
        let candidate = central_member(points, &members, distance, min_points_per_task)
            .ok_or(Error::EmptyInput)?;

        if candidate == far {
            return Ok(Split {
                medoid: far,
                members,
                iterations: iteration,
            });
        }

        far = candidate;
        members = far_side(points, anchor, far, remaining, distance);
    }

    log::warn!(
        "anomalous pattern search did not settle within {max_iter} iterations ({} points remaining)",
        remaining.len()
    );
    Err(Error::NotConverged {
        iterations: max_iter,
    })
}

/// Run anomalous-pattern initialization over every point.
pub(crate) fn anomalous_medoids<T, D>(
    points: &[T],
    distance: &D,
    min_points_per_task: usize,
    max_iter: usize,
) -> Result<MedoidSet>
where
    T: Sync,
    D: Distance<T> + Sync + ?Sized,
{
    let anchor = central_point(points, distance, min_points_per_task).ok_or(Error::EmptyInput)?;

    let mut remaining: Vec<usize> = (0..points.len()).collect();
    let mut assigned = vec![false; points.len()];
    let mut medoids = Vec::new();

    while !remaining.is_empty() {
        let split = split_off(
            points,
            anchor,
            &remaining,
            distance,
            min_points_per_task,
            max_iter,
        )?;

        for &idx in &split.members {
            assigned[idx] = true;
        }
        remaining.retain(|&idx| !assigned[idx]);

        log::debug!(
            "medoid {} took {} points after {} iterations, {} remaining",
            split.medoid,
            split.members.len(),
            split.iterations,
            remaining.len()
        );
        medoids.push(split.medoid);
    }

    Ok(MedoidSet { anchor, medoids })
}
