//! Medoid-based closest-match index.
//!
//! `medoid` clusters a set of points under any caller-supplied distance and
//! answers "closest match" queries against the result. It was written for
//! spelling suggestions over a word list with edit distance, but nothing in
//! the engine is specific to strings.
//!
//! The public API is split into:
//! - [`cluster`]: central-point search, anomalous-pattern seeding and
//!   nearest-medoid assignment ([`Pam`])
//! - [`search`]: tolerance-banded candidate search
//! - [`index`]: the immutable [`MedoidIndex`] and its two-level query
//! - [`corpus`]: word-list loading with deduplication
//!
//! ```rust
//! use medoid::{Levenshtein, MedoidIndex};
//!
//! let words = ["hello", "hallo", "hollo", "world", "word", "ward"]
//!     .map(String::from)
//!     .to_vec();
//! let index = MedoidIndex::build(words, Levenshtein).unwrap();
//!
//! let found = index.query(&"helo".to_string());
//! assert_eq!(found, [&"hello".to_string()]);
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod corpus;
pub mod distance;
pub mod error;
pub mod index;
pub mod search;

pub use cluster::{Cluster, Clustering, MedoidSet, Pam};
pub use corpus::{Corpus, CorpusOptions, LoadReport};
pub use distance::{distances_from, Distance, Levenshtein};
pub use error::{Error, Result};
pub use index::MedoidIndex;
pub use search::{closest_within, BandedCandidates};
