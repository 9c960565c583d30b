//! File move detection between two snapshots of a project
//!
//! A file that disappears from the previous snapshot is matched with a file that
//! only appears in the new snapshot when their line contents are similar enough.
//! Detection performs no I/O of its own; everything goes through a
//! [`DataSource`].
//!
//! # Module Organization
//!
//! - [`line_hashes`] - Line fingerprints and file keys
//! - [`similarity`] - Similarity scoring between line hash sequences
//! - [`data_source`] - Port to the previous and new snapshot data
//! - [`matching`] - Match candidates, their ordering and the acceptance threshold
//! - [`detector`] - Main MoveDetector implementation
//! - [`file_moves`] - Detection result
//! - [`snapshot`] - In-memory snapshots and the data source over them
//! - [`monitoring`] - Per-call statistics
//! - [`config`] - Resource configuration
//! - [`error`] - Move detection specific error types

pub mod config;
pub mod data_source;
pub mod detector;
pub mod error;
pub mod file_moves;
pub mod line_hashes;
pub mod matching;
pub mod monitoring;
pub mod similarity;
pub mod snapshot;

// Re-export main types for convenience
pub use config::MoveDetectorConfig;
pub use data_source::{DataSource, TracedDataSource};
pub use detector::MoveDetector;
pub use error::{MoveDetectionError, MoveDetectionResult};
pub use file_moves::FileMoves;
pub use line_hashes::{FileKey, LineHash, LineHashSequence};
pub use matching::MIN_ACCEPT_SCORE;
pub use monitoring::{DetectionPhase, DetectionStats};
pub use similarity::{LcsScorer, SimilarityScorer};
pub use snapshot::{Snapshot, SnapshotDataSource};
