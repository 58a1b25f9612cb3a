//! Medoid clustering over arbitrary distances.
//!
//! Points are opaque. The only thing the algorithms ask of them is a
//! [`Distance`](crate::Distance) between two points, so strings under edit
//! distance cluster the same way integers under absolute difference do.
//!
//! ## Medoids, not centroids
//!
//! A centroid is a synthetic average and needs a vector space. A **medoid** is
//! an actual member of the data set: the point minimizing the total distance to
//! the rest of its cluster.
//!
//! ```text
//! medoid(C) = argmin_{p ∈ C} Σ_{q ∈ C} d(p, q)
//! ```
//!
//! ## Algorithms (implemented)
//!
//! ### Central-point search
//!
//! The medoid of a whole set, computed in parallel blocks. Used once for the
//! corpus and once per refinement round inside anomalous-pattern seeding.
//!
//! ### Anomalous-pattern initialization
//!
//! Repeatedly peels the most "anomalous" group (furthest from the global
//! center) off the remaining points until none are left. The number of
//! clusters falls out of the data.
//!
//! ### Assignment
//!
//! Every point goes to its nearest medoid. Together with the seeding this is
//! [`Pam`].
//!
//! **Assumptions**:
//! - The distance is symmetric and zero on equal points
//! - Points are distinct
//! - Distances behave roughly like a metric (the triangle inequality is not
//!   checked, but quality suffers without it)
//!
//! **Non-goals**: the result is a heuristic partition, not a globally optimal
//! k-medoids solution.
//!
//! ## Usage
//!
//! ```rust
//! use medoid::cluster::{Clustering, Pam};
//!
//! let data = vec![0i64, 1, 2, 100, 101, 102];
//! let abs_diff = |a: &i64, b: &i64| a.abs_diff(*b) as usize;
//!
//! let labels = Pam::new(abs_diff).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_eq!(labels[3], labels[5]);
//! assert_ne!(labels[0], labels[3]);
//! ```

mod anomalous;
mod central;
mod pam;
mod traits;
mod util;

pub use anomalous::MedoidSet;
pub use central::{central_point, DEFAULT_MIN_POINTS_PER_TASK};
pub use pam::{Cluster, Pam, PamFit, DEFAULT_MAX_ITER};
pub use traits::Clustering;
