use super::{BitStore, GridDirection, GridMaze, GridNode};
use log::{debug, warn};
use rand::Rng;

/// one level of the carving stack: the cell and the directions already tried from it
struct Frame {
	node: GridNode,
	tried: u8,
}

impl Frame {
	fn new(node: GridNode) -> Self {
		Frame { node, tried: 0 }
	}

	/// draws one of the untried directions uniformly at random and marks it tried.
	/// Returns None once all four have been tried
	fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<GridDirection> {
		let remaining = GridDirection::ALL.len() - self.tried.count_ones() as usize;
		if remaining == 0 {
			return None;
		}
		let pick = rng.gen_range(0..remaining);
		let (idx, direction) = GridDirection::ALL
			.iter()
			.copied()
			.enumerate()
			.filter(|(idx, _)| self.tried & (1 << idx) == 0)
			.nth(pick)?;
		self.tried |= 1 << idx;
		Some(direction)
	}
}

/// Carves a perfect maze into a fully walled `maze` using randomized depth-first backtracking:
///
/// 1. start at the top-left cell and mark it visited
/// 2. from the cell on top of the stack, try its four directions in random order. The first
///    one leading to an unvisited neighbor gets its wall knocked down and the neighbor is
///    pushed onto the stack
/// 3. if every direction has been tried, pop the cell (backtrack)
/// 4. repeat until every cell has been visited
///
/// The stack is explicit, so the maze size is not limited by the call stack. All visited flags are
/// cleared again before returning. Returns the number of passages carved, `rows * cols - 1` for a
/// freshly created maze.
pub fn generate<B: BitStore, R: Rng>(maze: &mut GridMaze<B>, rng: &mut R) -> usize {
	let total = maze.len();
	let start = maze.entry();

	let mut stack = Vec::with_capacity(total);
	stack.push(Frame::new(start));
	maze.set_visited(start, true);
	let mut visited = 1;
	let mut backtracks = 0usize;

	'carve: while visited < total {
		let top = match stack.last_mut() {
			Some(top) => top,
			None => {
				warn!(
					"carving stack drained with {} of {} cells visited, was the maze already generated?",
					visited, total
				);
				break;
			}
		};
		let node = top.node;

		while let Some(direction) = top.draw(rng) {
			let next = match maze.neighbor(node, direction) {
				Some(next) if maze.has_wall(node, direction) && !maze.is_visited(next) => next,
				_ => continue,
			};
			maze.carve(node, direction);
			maze.set_visited(next, true);
			visited += 1;
			stack.push(Frame::new(next));
			continue 'carve;
		}

		stack.pop();
		backtracks += 1;
	}

	maze.clear_visited();

	let (rows, cols) = maze.dimensions();
	debug!(
		"carved {}x{} maze: {} passages, {} backtracks",
		rows,
		cols,
		visited - 1,
		backtracks
	);
	visited - 1
}
