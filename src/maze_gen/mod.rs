mod bits;
mod error;
mod generator;
mod grid_maze;
mod grid_node;
mod solver;

pub use {
	bits::{BitStore, PackedBits, PlainBits},
	error::MazeError,
	generator::generate,
	grid_maze::{GridDirection, GridMaze},
	grid_node::GridNode,
	solver::{find_path, find_path_ordered},
};
