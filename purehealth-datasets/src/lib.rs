//! Bundled Sample Datasets and Station History Store
//!
//! ## Overview
//!
//! Offline data for PureHealth deployments: a curated slice of the
//! MPCB monitoring network's readings and district disease baselines,
//! embedded at compile time so demo installs and field tablets work
//! with no connectivity at all.
//!
//! ## Design
//!
//! - **Embedded, parsed once**: the JSON assets ship inside the binary
//!   (`include_str!`) and are parsed on first access, then cached
//!   behind an `RwLock`. `clear()` drops the cache; the next access
//!   re-parses. No hidden singletons - callers may hold their own
//!   [`SampleRegistry`], and a process-wide default is provided for
//!   convenience.
//! - **Degrade, don't crash**: a reading with an unparseable timestamp
//!   is skipped with a `warn`; a structurally malformed file surfaces
//!   as a [`DatasetError`], never a panic. The scoring engine's own
//!   default-substitution handles malformed parameters below this
//!   layer.
//! - **History queries**: [`StationStore`] answers the two questions
//!   screens actually ask - full history and a time-range slice -
//!   over an in-memory keyed store seeded from the samples or fed by
//!   a live collector.
//!
//! ## Usage Example
//!
//! ```
//! use purehealth_datasets::{default_registry, StationStore};
//!
//! let registry = default_registry();
//! let stations = registry.stations()?;
//! assert!(!stations.is_empty());
//!
//! let store = StationStore::seeded_from(registry)?;
//! let history = store.station_history("MH-GODAVARI-01");
//! assert!(!history.is_empty());
//! # Ok::<(), purehealth_datasets::DatasetError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use thiserror_no_std::Error;

pub mod records;
pub mod registry;
pub mod store;

pub use records::{DiseaseBaseline, DistrictBaseline, Station};
pub use registry::{default_registry, SampleRegistry};
pub use store::StationStore;

/// Errors surfaced while loading or querying the bundled datasets
#[derive(Error, Debug)]
pub enum DatasetError {
    /// A dataset file failed structural parsing
    #[error("malformed dataset {name}: {detail}")]
    Malformed {
        /// Which dataset failed
        name: &'static str,
        /// Parser diagnostic
        detail: String,
    },

    /// A dataset file could not be read from disk
    #[error("unreadable dataset {name}: {detail}")]
    Unreadable {
        /// Which dataset failed
        name: &'static str,
        /// I/O diagnostic
        detail: String,
    },

    /// The requested station is not in the dataset
    #[error("unknown station {0:?}")]
    UnknownStation(String),

    /// A cache lock was poisoned by a panicking writer
    #[error("dataset cache lock poisoned")]
    Poisoned,
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
