use super::{BitStore, GridNode, MazeError, PackedBits};
use std::fmt::{Display, Formatter};

/// A rectangular maze of `rows` x `cols` cells and the walls between them.
///
/// All three boolean arrays are stored flat in row-order:
/// * `cells` holds one "visited" flag per cell, `row * cols + col`
/// * `horiz_walls` holds the walls above each cell, rows `0..=rows`, `row * cols + col`
/// * `vert_walls` holds the walls left of each cell, columns `0..=cols`, `row * (cols + 1) + col`
///
/// A wall bit of `true` means the wall is present. Coordinates are validated by the caller.
#[derive(Debug, Clone)]
pub struct GridMaze<B = PackedBits> {
	rows: usize,
	cols: usize,
	cells: B,
	horiz_walls: B,
	vert_walls: B,
}

impl<B: BitStore> GridMaze<B> {
	/// constructs a new, fully walled maze with the specified dimensions and every cell unvisited
	pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
		if rows == 0 || cols == 0 {
			return Err(MazeError::InvalidDimensions { rows, cols });
		}
		let too_large = || MazeError::TooLarge { rows, cols };
		let cell_count = rows.checked_mul(cols).ok_or_else(too_large)?;
		let horiz_count = rows
			.checked_add(1)
			.and_then(|r| r.checked_mul(cols))
			.ok_or_else(too_large)?;
		let vert_count = cols
			.checked_add(1)
			.and_then(|c| c.checked_mul(rows))
			.ok_or_else(too_large)?;

		Ok(Self {
			rows,
			cols,
			cells: B::filled(cell_count, false)?,
			horiz_walls: B::filled(horiz_count, true)?,
			vert_walls: B::filled(vert_count, true)?,
		})
	}

	/// returns the dimensions of the maze as a (rows, cols) tuple
	pub fn dimensions(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}

	/// returns the total number of cells in this maze (i.e. rows * cols)
	pub fn len(&self) -> usize {
		self.rows * self.cols
	}

	/// the cell the solver starts from
	pub fn entry(&self) -> GridNode {
		GridNode::new(0, 0)
	}

	/// the cell the solver searches for
	pub fn exit(&self) -> GridNode {
		GridNode::new(self.rows - 1, self.cols - 1)
	}

	pub fn is_visited(&self, node: GridNode) -> bool {
		self.cells.get(node.row() * self.cols + node.col())
	}

	pub fn set_visited(&mut self, node: GridNode, visited: bool) {
		self.cells.set(node.row() * self.cols + node.col(), visited)
	}

	/// marks every cell as unvisited
	pub fn clear_visited(&mut self) {
		self.cells.fill(false);
	}

	/// returns the visited cells in row order
	pub fn visited_nodes(&self) -> Vec<GridNode> {
		(0..self.rows)
			.flat_map(|row| (0..self.cols).map(move |col| GridNode::new(row, col)))
			.filter(|&node| self.is_visited(node))
			.collect()
	}

	/// the wall along the top edge of cell (`row`, `col`); `row` may equal `rows` for the bottom edge
	pub fn has_horiz_wall(&self, row: usize, col: usize) -> bool {
		self.horiz_walls.get(row * self.cols + col)
	}

	pub fn set_horiz_wall(&mut self, row: usize, col: usize, present: bool) {
		self.horiz_walls.set(row * self.cols + col, present)
	}

	/// the wall along the left edge of cell (`row`, `col`); `col` may equal `cols` for the right edge
	pub fn has_vert_wall(&self, row: usize, col: usize) -> bool {
		self.vert_walls.get(row * (self.cols + 1) + col)
	}

	pub fn set_vert_wall(&mut self, row: usize, col: usize, present: bool) {
		self.vert_walls.set(row * (self.cols + 1) + col, present)
	}

	/// returns the neighbor of a node in the given direction, or None if node is at the maze edge
	pub fn neighbor(&self, node: GridNode, direction: GridDirection) -> Option<GridNode> {
		let (row, col) = (node.row(), node.col());
		match direction {
			GridDirection::Up if row > 0 => Some(GridNode::new(row - 1, col)),
			GridDirection::Left if col > 0 => Some(GridNode::new(row, col - 1)),
			GridDirection::Down if row + 1 < self.rows => Some(GridNode::new(row + 1, col)),
			GridDirection::Right if col + 1 < self.cols => Some(GridNode::new(row, col + 1)),
			_ => None,
		}
	}

	/// returns true if the wall on the given side of `node` is present. Boundary walls are included
	pub fn has_wall(&self, node: GridNode, direction: GridDirection) -> bool {
		let (row, col) = (node.row(), node.col());
		match direction {
			GridDirection::Up => self.has_horiz_wall(row, col),
			GridDirection::Left => self.has_vert_wall(row, col),
			GridDirection::Down => self.has_horiz_wall(row + 1, col),
			GridDirection::Right => self.has_vert_wall(row, col + 1),
		}
	}

	fn set_wall(&mut self, node: GridNode, direction: GridDirection, present: bool) {
		let (row, col) = (node.row(), node.col());
		match direction {
			GridDirection::Up => self.set_horiz_wall(row, col, present),
			GridDirection::Left => self.set_vert_wall(row, col, present),
			GridDirection::Down => self.set_horiz_wall(row + 1, col, present),
			GridDirection::Right => self.set_vert_wall(row, col + 1, present),
		}
	}

	/// removes the wall on the given side of `node`, creating a passage to its neighbor.
	/// Boundary walls are permanent: carving toward the maze edge returns None and changes nothing
	pub fn carve(&mut self, node: GridNode, direction: GridDirection) -> Option<GridNode> {
		let next = self.neighbor(node, direction)?;
		self.set_wall(node, direction, false);
		Some(next)
	}

	/// returns true if `node` has a neighbor in the given direction and no wall separates them
	pub fn is_passable(&self, node: GridNode, direction: GridDirection) -> bool {
		self.neighbor(node, direction).is_some() && !self.has_wall(node, direction)
	}

	/// returns the number of interior walls that have been carved away
	pub fn passage_count(&self) -> usize {
		let horiz = (1..self.rows)
			.flat_map(|row| (0..self.cols).map(move |col| (row, col)))
			.filter(|&(row, col)| !self.has_horiz_wall(row, col))
			.count();
		let vert = (0..self.rows)
			.flat_map(|row| (1..self.cols).map(move |col| (row, col)))
			.filter(|&(row, col)| !self.has_vert_wall(row, col))
			.count();
		horiz + vert
	}

	/// returns the rendered maze as a String, see the `Display` impl
	pub fn render(&self) -> String {
		self.to_string()
	}
}

/// prints the maze as ASCII: each row is a line of `+---`/`+   ` top walls followed by a line of
/// `|`/` ` left walls and ` . `/`   ` cell bodies, with one closing line for the bottom walls
impl<B: BitStore> Display for GridMaze<B> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for row in 0..=self.rows {
			for col in 0..self.cols {
				f.write_str(if self.has_horiz_wall(row, col) { "+---" } else { "+   " })?;
			}
			f.write_str("+\n")?;

			if row == self.rows {
				break;
			}

			for col in 0..self.cols {
				f.write_str(if self.has_vert_wall(row, col) { "|" } else { " " })?;
				let body = if self.is_visited(GridNode::new(row, col)) { " . " } else { "   " };
				f.write_str(body)?;
			}
			f.write_str(if self.has_vert_wall(row, self.cols) { "|\n" } else { " \n" })?;
		}

		Ok(())
	}
}

/// The four orthogonal moves, in the fixed order the generator and solver index them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDirection {
	Up,
	Left,
	Down,
	Right,
}

impl GridDirection {
	pub const ALL: [GridDirection; 4] = [
		GridDirection::Up,
		GridDirection::Left,
		GridDirection::Down,
		GridDirection::Right,
	];

	pub fn opposite(&self) -> GridDirection {
		match self {
			GridDirection::Up => GridDirection::Down,
			GridDirection::Left => GridDirection::Right,
			GridDirection::Down => GridDirection::Up,
			GridDirection::Right => GridDirection::Left,
		}
	}
}
