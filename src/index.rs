//! Medoid index and closest-match queries.
//!
//! An index is built once from a corpus and never changes afterwards. Queries
//! run the tolerance-banded search twice over: first across the medoids, then
//! across the members of whichever clusters matched. A final pass over the
//! result keeps the output shape uniform with the inner stages.

use std::collections::HashSet;
use std::hash::Hash;

use crate::cluster::{Cluster, Pam};
use crate::distance::Distance;
use crate::error::{Error, Result};
use crate::search::closest_within;

/// Immutable medoid index over a set of distinct points.
#[derive(Debug, Clone)]
pub struct MedoidIndex<T, D> {
    points: Vec<T>,
    clusters: Vec<Cluster>,
    anchor: usize,
    distance: D,
}

impl<T, D> MedoidIndex<T, D>
where
    T: Eq + Hash + Sync,
    D: Distance<T> + Sync,
{
    /// Build an index with default clustering parameters.
    pub fn build(points: Vec<T>, distance: D) -> Result<Self> {
        Self::build_with(points, Pam::new(distance))
    }

    /// Build an index with a configured [`Pam`].
    ///
    /// Fails with [`Error::EmptyInput`] on an empty corpus and
    /// [`Error::DuplicatePoint`] when a point occurs twice.
    pub fn build_with(points: Vec<T>, pam: Pam<D>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        reject_duplicates(&points)?;

        let fit = pam.fit(&points)?;

        Ok(Self {
            points,
            clusters: fit.clusters,
            anchor: fit.anchor,
            distance: pam.into_distance(),
        })
    }

    /// Closest matches for `input`, in no particular order.
    pub fn query(&self, input: &T) -> Vec<&T> {
        let representatives = closest_within(
            input,
            self.clusters.iter().map(|c| &self.points[c.medoid]),
            &self.distance,
            0,
        );

        let gathered: Vec<&T> = self
            .clusters
            .iter()
            .filter(|c| representatives.contains(&&self.points[c.medoid]))
            .flat_map(|c| c.members.iter().map(|&idx| &self.points[idx]))
            .collect();

        let closest = closest_within(input, gathered, &self.distance, 0);
        closest_within(input, closest, &self.distance, 0)
    }

    /// Closest matches for `input` paired with their distance, nearest first.
    ///
    /// Equal distances keep the order produced by [`query`](Self::query).
    pub fn suggestions(&self, input: &T) -> Vec<(&T, usize)> {
        let mut ranked: Vec<(&T, usize)> = self
            .query(input)
            .into_iter()
            .map(|p| (p, self.distance.distance(input, p)))
            .collect();
        ranked.sort_by_key(|&(_, d)| d);
        ranked
    }
}

impl<T, D> MedoidIndex<T, D> {
    /// All indexed points, in corpus order.
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// Clusters in medoid discovery order. Indices refer to [`points`](Self::points).
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Cluster representatives in discovery order.
    pub fn medoids(&self) -> impl Iterator<Item = &T> + '_ {
        self.clusters.iter().map(move |c| &self.points[c.medoid])
    }

    /// Members of the cluster represented by `medoid`, or `None` if `medoid`
    /// is not a representative.
    pub fn cluster_of(&self, medoid: &T) -> Option<Vec<&T>>
    where
        T: PartialEq,
    {
        self.clusters
            .iter()
            .find(|c| self.points[c.medoid] == *medoid)
            .map(|c| c.members.iter().map(|&idx| &self.points[idx]).collect())
    }

    /// Central point of the whole corpus.
    pub fn central_point(&self) -> &T {
        &self.points[self.anchor]
    }

    /// The distance oracle.
    pub fn distance(&self) -> &D {
        &self.distance
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a successfully built index.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn reject_duplicates<T: Eq + Hash>(points: &[T]) -> Result<()> {
    let mut seen: HashSet<&T> = HashSet::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        if !seen.insert(point) {
            return Err(Error::DuplicatePoint { index });
        }
    }
    Ok(())
}
