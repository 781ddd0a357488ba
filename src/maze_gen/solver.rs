use super::{BitStore, GridDirection, GridMaze, GridNode, MazeError};
use log::debug;

/// Finds the path from the entry (top-left) to the exit (bottom-right) of a generated maze and
/// marks it in the maze's visited flags. Returns the path cells in order, entry and exit included.
pub fn find_path<B: BitStore>(maze: &mut GridMaze<B>) -> Result<Vec<GridNode>, MazeError> {
	find_path_ordered(maze, &GridDirection::ALL)
}

/// Depth-first search from the entry, trying directions from each cell in the given `order`.
///
/// Each stack level keeps a cursor into `order` so that, after backtracking into a cell, the search
/// resumes with the direction following the one that led to the dead end. Cells popped off the stack
/// are unmarked, so when the exit is reached exactly the stack contents remain marked.
///
/// Because a perfect maze has a single simple path between any two cells, the path found does not
/// depend on `order`. On a maze with no route to the exit every flag is left cleared.
pub fn find_path_ordered<B: BitStore>(
	maze: &mut GridMaze<B>,
	order: &[GridDirection],
) -> Result<Vec<GridNode>, MazeError> {
	maze.clear_visited();

	let (entry, exit) = (maze.entry(), maze.exit());
	// (cell, index into `order` of the next direction to try)
	let mut stack: Vec<(GridNode, usize)> = vec![(entry, 0)];
	maze.set_visited(entry, true);
	let mut explored = 1usize;

	'search: while let Some(&(node, cursor)) = stack.last() {
		if node == exit {
			break;
		}

		for (offset, &direction) in order[cursor..].iter().enumerate() {
			if !maze.is_passable(node, direction) {
				continue;
			}
			let next = match maze.neighbor(node, direction) {
				Some(next) if !maze.is_visited(next) => next,
				_ => continue,
			};
			if let Some(top) = stack.last_mut() {
				top.1 = cursor + offset + 1;
			}
			maze.set_visited(next, true);
			stack.push((next, 0));
			explored += 1;
			continue 'search;
		}

		maze.set_visited(node, false);
		stack.pop();
	}

	let (rows, cols) = maze.dimensions();
	if stack.is_empty() {
		return Err(MazeError::NoPath { rows, cols });
	}

	debug!(
		"solved {}x{} maze: path of {} cells, {} cells explored",
		rows,
		cols,
		stack.len(),
		explored
	);
	Ok(stack.into_iter().map(|(node, _)| node).collect())
}
