//! Partitioning around medoids with anomalous-pattern seeding.
//!
//! [`Pam`] ties the pieces together: anomalous-pattern initialization picks the
//! medoids, then every point is assigned to its nearest medoid. There is no
//! swap phase; the seeding is the clustering.
//!
//! ```rust
//! use medoid::cluster::{Clustering, Pam};
//! use medoid::Levenshtein;
//!
//! let words = ["hello", "hallo", "hollo", "world", "word", "ward"];
//! let labels = Pam::new(Levenshtein).fit_predict(&words).unwrap();
//!
//! assert_eq!(labels[3], labels[4]); // world, word
//! assert_ne!(labels[0], labels[4]); // hello, word
//! ```

use rayon::prelude::*;

use super::anomalous::{anomalous_medoids, MedoidSet};
use super::central::{central_point, DEFAULT_MIN_POINTS_PER_TASK};
use super::traits::Clustering;
use super::util::nearest_medoid;
use crate::distance::Distance;
use crate::error::{Error, Result};

/// Default cap on refinement rounds per anomalous-pattern split.
pub const DEFAULT_MAX_ITER: usize = 100;

/// A medoid and the points assigned to it.
///
/// Both are indices into the clustered slice. `members` keeps input order and
/// includes the medoid itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    /// Index of the cluster representative.
    pub medoid: usize,
    /// Indices of every point assigned to this medoid.
    pub members: Vec<usize>,
}

impl Cluster {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no point was assigned here.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Result of [`Pam::fit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PamFit {
    /// Central point of the whole input.
    pub anchor: usize,
    /// Clusters in medoid discovery order.
    pub clusters: Vec<Cluster>,
}

/// Medoid clustering with a data-dependent number of clusters.
#[derive(Debug, Clone)]
pub struct Pam<D> {
    distance: D,
    /// Smallest block handed to one parallel task in central-point search.
    min_points_per_task: usize,
    /// Cap on refinement rounds per split.
    max_iter: usize,
}

impl<D> Pam<D> {
    /// Create a clusterer over `distance` with default tuning.
    pub fn new(distance: D) -> Self {
        Self {
            distance,
            min_points_per_task: DEFAULT_MIN_POINTS_PER_TASK,
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    /// Set the minimum number of points per parallel task.
    ///
    /// Inputs smaller than this run on the calling thread.
    pub fn with_min_points_per_task(mut self, min_points_per_task: usize) -> Self {
        self.min_points_per_task = min_points_per_task;
        self
    }

    /// Set the refinement cap for each anomalous-pattern split.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// The distance oracle.
    pub fn distance(&self) -> &D {
        &self.distance
    }

    /// Consume the clusterer, returning its distance oracle.
    pub fn into_distance(self) -> D {
        self.distance
    }

    /// Minimum points per parallel task.
    pub fn min_points_per_task(&self) -> usize {
        self.min_points_per_task
    }

    /// Refinement cap per split.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    fn validate(&self) -> Result<()> {
        if self.min_points_per_task == 0 {
            return Err(Error::InvalidParameter {
                name: "min_points_per_task",
                message: "must be at least 1",
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        Ok(())
    }
}

impl<D: Default> Default for Pam<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D> Pam<D> {
    /// The point minimizing the sum of distances to all others.
    pub fn central_point<'a, T>(&self, points: &'a [T]) -> Result<&'a T>
    where
        T: Sync,
        D: Distance<T> + Sync,
    {
        self.validate()?;
        central_point(points, &self.distance, self.min_points_per_task)
            .map(|idx| &points[idx])
            .ok_or(Error::EmptyInput)
    }

    /// Discover medoids by anomalous-pattern initialization.
    pub fn medoids<T>(&self, points: &[T]) -> Result<MedoidSet>
    where
        T: Sync,
        D: Distance<T> + Sync,
    {
        self.validate()?;
        anomalous_medoids(
            points,
            &self.distance,
            self.min_points_per_task,
            self.max_iter,
        )
    }

    /// Assign every point to its nearest medoid.
    ///
    /// `medoids` are indices into `points`. The returned clusters follow the
    /// order of `medoids`; ties go to the earlier medoid.
    pub fn assign<T>(&self, medoids: &[usize], points: &[T]) -> Result<Vec<Cluster>>
    where
        T: Sync,
        D: Distance<T> + Sync,
    {
        if medoids.is_empty() {
            return Err(Error::EmptyInput);
        }
        if medoids.iter().any(|&m| m >= points.len()) {
            return Err(Error::InvalidParameter {
                name: "medoids",
                message: "index out of range",
            });
        }

        let labels: Vec<usize> = (0..points.len())
            .into_par_iter()
            .map(|idx| {
                // `medoids` is non-empty, so a nearest medoid always exists.
                nearest_medoid(points, idx, medoids, &self.distance).unwrap_or(0)
            })
            .collect();

        let mut clusters: Vec<Cluster> = medoids
            .iter()
            .map(|&medoid| Cluster {
                medoid,
                members: Vec::new(),
            })
            .collect();
        for (idx, label) in labels.into_iter().enumerate() {
            clusters[label].members.push(idx);
        }

        Ok(clusters)
    }

    /// Discover medoids and assign every point.
    pub fn fit<T>(&self, points: &[T]) -> Result<PamFit>
    where
        T: Sync,
        D: Distance<T> + Sync,
    {
        let MedoidSet { anchor, medoids } = self.medoids(points)?;
        let clusters = self.assign(&medoids, points)?;
        log::info!(
            "clustered {} points into {} clusters",
            points.len(),
            clusters.len()
        );
        Ok(PamFit { anchor, clusters })
    }
}

impl<T, D> Clustering<T> for Pam<D>
where
    T: Sync,
    D: Distance<T> + Sync,
{
    fn fit_predict(&self, points: &[T]) -> Result<Vec<usize>> {
        let fit = self.fit(points)?;
        let mut labels = vec![0usize; points.len()];
        for (label, cluster) in fit.clusters.iter().enumerate() {
            for &idx in &cluster.members {
                labels[idx] = label;
            }
        }
        Ok(labels)
    }

    fn fit_medoids(&self, points: &[T]) -> Result<Vec<usize>> {
        Ok(self.medoids(points)?.medoids)
    }

    /// The number of clusters is discovered from the data, so this returns 0.
    fn n_clusters(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Levenshtein;

    fn corpus() -> Vec<String> {
        ["hello", "hallo", "hollo", "world", "word", "ward"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn fit_two_word_families() {
        let words = corpus();
        let fit = Pam::new(Levenshtein).fit(&words).unwrap();

        assert_eq!(words[fit.anchor], "hollo");
        let summary: Vec<(&str, Vec<&str>)> = fit
            .clusters
            .iter()
            .map(|c| {
                (
                    words[c.medoid].as_str(),
                    c.members.iter().map(|&i| words[i].as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("word", vec!["world", "word", "ward"]),
                ("hello", vec!["hello", "hallo"]),
                ("hollo", vec!["hollo"]),
            ]
        );
    }

    #[test]
    fn fit_predict_labels_every_point() {
        let words = corpus();
        let labels = Pam::new(Levenshtein).fit_predict(&words).unwrap();
        assert_eq!(labels, vec![1, 1, 2, 0, 0, 0]);
    }

    #[test]
    fn fit_medoids_in_discovery_order() {
        let words = corpus();
        let pam = Pam::new(Levenshtein);
        assert_eq!(pam.fit_medoids(words.as_slice()).unwrap(), vec![4, 0, 2]);

        let empty: Vec<String> = Vec::new();
        assert!(matches!(pam.fit_medoids(empty.as_slice()), Err(Error::EmptyInput)));
    }

    #[test]
    fn assign_ties_go_to_earlier_medoid() {
        let points = [0i32, 10, 5];
        let pam = Pam::new(|a: &i32, b: &i32| a.abs_diff(*b) as usize);
        let clusters = pam.assign(&[0, 1], &points).unwrap();
        assert_eq!(clusters[0].members, vec![0, 2]);
        assert_eq!(clusters[1].members, vec![1]);
    }

    #[test]
    fn assign_rejects_bad_medoids() {
        let points = [0i32, 1];
        let pam = Pam::new(|a: &i32, b: &i32| a.abs_diff(*b) as usize);
        assert!(matches!(pam.assign(&[], &points), Err(Error::EmptyInput)));
        assert!(matches!(
            pam.assign(&[2], &points),
            Err(Error::InvalidParameter { name: "medoids", .. })
        ));
    }

    #[test]
    fn central_point_of_small_set() {
        let words = ["cat", "cap", "bat", "rat"];
        assert_eq!(*Pam::new(Levenshtein).central_point(&words).unwrap(), "cat");
    }

    #[test]
    fn empty_input() {
        let words: Vec<String> = vec![];
        let pam = Pam::new(Levenshtein);
        assert!(matches!(pam.central_point(&words), Err(Error::EmptyInput)));
        assert!(matches!(pam.fit(&words), Err(Error::EmptyInput)));
        assert!(pam.fit_predict(&words).is_err());
    }

    #[test]
    fn invalid_params() {
        let words = corpus();
        let pam = Pam::new(Levenshtein).with_min_points_per_task(0);
        assert!(pam.fit(&words).is_err());

        let pam = Pam::new(Levenshtein).with_max_iter(0);
        assert!(pam.fit(&words).is_err());
    }

    #[test]
    fn iteration_cap_surfaces_as_error() {
        let words = corpus();
        let pam = Pam::new(Levenshtein).with_max_iter(1);
        assert!(matches!(
            pam.fit(&words),
            Err(Error::NotConverged { iterations: 1 })
        ));
    }

    #[test]
    fn block_size_does_not_change_result() {
        let words = corpus();
        let a = Pam::new(Levenshtein).with_min_points_per_task(1).fit(&words).unwrap();
        let b = Pam::new(Levenshtein).with_min_points_per_task(1000).fit(&words).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn n_clusters_is_dynamic() {
        let pam = Pam::new(Levenshtein);
        assert_eq!(<Pam<Levenshtein> as Clustering<String>>::n_clusters(&pam), 0);
    }
}
