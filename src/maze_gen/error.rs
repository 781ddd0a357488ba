use std::collections::TryReserveError;
use thiserror::Error;

/// Failures reported by the maze core. Construction errors never leave a usable grid behind.
#[derive(Debug, Error)]
pub enum MazeError {
	#[error("invalid maze dimensions {rows}x{cols}: both must be positive")]
	InvalidDimensions { rows: usize, cols: usize },
	#[error("maze dimensions {rows}x{cols} are too large to address")]
	TooLarge { rows: usize, cols: usize },
	#[error("could not allocate maze storage: {0}")]
	Allocation(#[from] TryReserveError),
	#[error("no path from the entry to the exit of the {rows}x{cols} maze")]
	NoPath { rows: usize, cols: usize },
}
