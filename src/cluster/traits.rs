use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering<T> {
    /// Fit the model and return one cluster label per input point.
    fn fit_predict(&self, points: &[T]) -> Result<Vec<usize>>;

    /// Fit the model and return the index of every cluster representative.
    fn fit_medoids(&self, points: &[T]) -> Result<Vec<usize>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For algorithms that discover the number of clusters dynamically this
    /// returns 0.
    fn n_clusters(&self) -> usize;
}
