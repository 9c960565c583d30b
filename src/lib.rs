mod error;
pub mod move_detection;
pub mod snapshot_file;
pub mod step;

pub use error::{FileMovesError, Result};
pub use move_detection::{
	DataSource, FileMoves, LcsScorer, LineHash, LineHashSequence, MoveDetectionError, MoveDetector,
	MoveDetectorConfig, SimilarityScorer, Snapshot, SnapshotDataSource, MIN_ACCEPT_SCORE,
};
pub use snapshot_file::{load_snapshot, write_snapshot};
pub use step::{collect_file_keys, Component, ComputationStep, FileMoveDetectionStep};
