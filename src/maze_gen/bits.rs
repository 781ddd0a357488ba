use super::MazeError;

const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-length boolean storage addressed by a logical index.
/// Indices are validated by the caller; debug builds assert on them.
pub trait BitStore: Sized {
	/// allocates `len` slots, all set to `value`
	fn filled(len: usize, value: bool) -> Result<Self, MazeError>;

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn get(&self, idx: usize) -> bool;

	fn set(&mut self, idx: usize, value: bool);

	/// sets every slot to `value`
	fn fill(&mut self, value: bool);
}

/// one `bool` per slot
#[derive(Debug, Clone)]
pub struct PlainBits {
	slots: Vec<bool>,
}

impl BitStore for PlainBits {
	fn filled(len: usize, value: bool) -> Result<Self, MazeError> {
		let mut slots = Vec::new();
		slots.try_reserve_exact(len)?;
		slots.resize(len, value);
		Ok(Self { slots })
	}

	fn len(&self) -> usize {
		self.slots.len()
	}

	fn get(&self, idx: usize) -> bool {
		debug_assert!(idx < self.len(), "bit index {} out of range", idx);
		self.slots[idx]
	}

	fn set(&mut self, idx: usize, value: bool) {
		debug_assert!(idx < self.len(), "bit index {} out of range", idx);
		self.slots[idx] = value;
	}

	fn fill(&mut self, value: bool) {
		for slot in self.slots.iter_mut() {
			*slot = value;
		}
	}
}

/// 64 slots per word. Padding bits past `len` mirror the last fill value and are never read.
#[derive(Debug, Clone)]
pub struct PackedBits {
	words: Vec<u64>,
	len: usize,
}

impl PackedBits {
	fn word_count(len: usize) -> usize {
		(len + WORD_BITS - 1) / WORD_BITS
	}

	fn fill_word(value: bool) -> u64 {
		if value {
			u64::MAX
		} else {
			0
		}
	}
}

impl BitStore for PackedBits {
	fn filled(len: usize, value: bool) -> Result<Self, MazeError> {
		let count = Self::word_count(len);
		let mut words = Vec::new();
		words.try_reserve_exact(count)?;
		words.resize(count, Self::fill_word(value));
		Ok(Self { words, len })
	}

	fn len(&self) -> usize {
		self.len
	}

	fn get(&self, idx: usize) -> bool {
		debug_assert!(idx < self.len, "bit index {} out of range", idx);
		self.words[idx / WORD_BITS] & (1 << (idx % WORD_BITS)) != 0
	}

	fn set(&mut self, idx: usize, value: bool) {
		debug_assert!(idx < self.len, "bit index {} out of range", idx);
		let mask = 1u64 << (idx % WORD_BITS);
		let word = &mut self.words[idx / WORD_BITS];
		if value {
			*word |= mask;
		} else {
			*word &= !mask;
		}
	}

	fn fill(&mut self, value: bool) {
		let word = Self::fill_word(value);
		for w in self.words.iter_mut() {
			*w = word;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{BitStore, PackedBits, PlainBits};
	use proptest::prelude::*;

	#[derive(Debug, Clone)]
	enum Op {
		Set(usize, bool),
		Fill(bool),
	}

	fn op_strategy(len: usize) -> impl Strategy<Value = Op> {
		prop_oneof![
			8 => (0..len, any::<bool>()).prop_map(|(idx, value)| Op::Set(idx, value)),
			1 => any::<bool>().prop_map(Op::Fill),
		]
	}

	fn ops_strategy() -> impl Strategy<Value = (usize, bool, Vec<Op>)> {
		(1usize..300, any::<bool>()).prop_flat_map(|(len, init)| {
			(Just(len), Just(init), prop::collection::vec(op_strategy(len), 0..200))
		})
	}

	/// applies `ops` to `store` and checks every slot against a reference bool vector after each step
	fn check_against_reference<B: BitStore>(len: usize, init: bool, ops: &[Op]) {
		let mut store = B::filled(len, init).unwrap();
		let mut reference = vec![init; len];
		assert_eq!(store.len(), len);

		for op in ops {
			match *op {
				Op::Set(idx, value) => {
					store.set(idx, value);
					reference[idx] = value;
				}
				Op::Fill(value) => {
					store.fill(value);
					reference.iter_mut().for_each(|slot| *slot = value);
				}
			}
			for (idx, expected) in reference.iter().enumerate() {
				assert_eq!(store.get(idx), *expected, "slot {} after {:?}", idx, op);
			}
		}
	}

	proptest! {
		#[test]
		fn packed_bits_match_reference((len, init, ops) in ops_strategy()) {
			check_against_reference::<PackedBits>(len, init, &ops);
		}

		#[test]
		fn plain_bits_match_reference((len, init, ops) in ops_strategy()) {
			check_against_reference::<PlainBits>(len, init, &ops);
		}
	}

	#[test]
	fn packed_bits_use_one_word_per_64_slots() {
		assert_eq!(PackedBits::filled(0, true).unwrap().words.len(), 0);
		assert_eq!(PackedBits::filled(64, true).unwrap().words.len(), 1);
		assert_eq!(PackedBits::filled(65, false).unwrap().words.len(), 2);
	}

	#[test]
	fn word_boundary_bits_are_independent() {
		let mut bits = PackedBits::filled(130, false).unwrap();
		bits.set(63, true);
		bits.set(64, true);
		bits.set(129, true);
		assert!(!bits.get(62));
		assert!(bits.get(63));
		assert!(bits.get(64));
		assert!(!bits.get(65));
		assert!(!bits.get(128));
		assert!(bits.get(129));

		bits.set(64, false);
		assert!(bits.get(63));
		assert!(!bits.get(64));
	}

	#[test]
	fn empty_store() {
		let bits = PlainBits::filled(0, true).unwrap();
		assert!(bits.is_empty());
	}
}
