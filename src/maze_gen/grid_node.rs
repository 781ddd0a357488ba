use std::fmt::{Display, Formatter};

/// GridNode identifies a single cell of a maze by its `row` and `col`umn.
/// Row 0 is the top of the maze, column 0 the left edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridNode {
	row: usize,
	col: usize,
}

impl GridNode {
	pub const fn new(row: usize, col: usize) -> Self {
		GridNode { row, col }
	}

	pub fn row(&self) -> usize {
		self.row
	}

	pub fn col(&self) -> usize {
		self.col
	}

	/// returns the Manhattan distance between the two nodes
	pub fn distance(&self, other: &GridNode) -> usize {
		let dr = if self.row > other.row { self.row - other.row } else { other.row - self.row };
		let dc = if self.col > other.col { self.col - other.col } else { other.col - self.col };
		dr + dc
	}
}

impl Display for GridNode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.row, self.col)
	}
}

#[cfg(test)]
mod tests {
	use super::GridNode;
	use std::collections::HashSet;

	#[test]
	fn should_create_new_node() {
		let node = GridNode::new(1, 3);
		assert_eq!(node.row(), 1);
		assert_eq!(node.col(), 3);
	}

	#[test]
	fn equal_positions_collapse_in_a_set() {
		let set: HashSet<_> = vec![GridNode::new(1, 2), GridNode::new(1, 2), GridNode::new(2, 1)]
			.into_iter()
			.collect();
		assert_eq!(set.len(), 2);
	}

	#[test]
	fn adjacent_nodes_are_one_apart() {
		let node = GridNode::new(4, 4);
		assert_eq!(node.distance(&GridNode::new(3, 4)), 1);
		assert_eq!(node.distance(&GridNode::new(4, 5)), 1);
		assert_eq!(node.distance(&GridNode::new(2, 7)), 5);
	}

	#[test]
	fn displays_as_row_col_pair() {
		assert_eq!(GridNode::new(0, 12).to_string(), "(0, 12)");
	}
}
