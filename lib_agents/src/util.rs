use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::cell::RefCell;

/// The randomness source behind an agent's move ordering.
///
/// Search agents shuffle the legal moves before folding to an extremum, so
/// equally-valued moves are chosen uniformly at random across calls.
/// `Disabled` keeps the engine's enumeration order, which is what makes
/// full minimax and the pruned search directly comparable.
pub(crate) enum MoveShuffler {
    /// Fresh thread-local randomness on every call.
    Thread,

    /// A seeded generator for reproducible runs.
    Seeded(RefCell<XorShiftRng>),

    /// No shuffling: moves stay in (row, col) enumeration order.
    Disabled,
}

impl MoveShuffler {
    pub fn seeded(seed: u64) -> Self {
        MoveShuffler::Seeded(RefCell::new(XorShiftRng::seed_from_u64(seed)))
    }

    pub fn shuffle<T>(&self, items: &mut [T]) {
        match self {
            MoveShuffler::Thread => items.shuffle(&mut rand::thread_rng()),
            MoveShuffler::Seeded(rng) => items.shuffle(&mut *rng.borrow_mut()),
            MoveShuffler::Disabled => {}
        }
    }

    /// One uniformly random element, or the first when shuffling is
    /// disabled. None on an empty slice.
    pub fn choose<T: Copy>(&self, items: &[T]) -> Option<T> {
        match self {
            MoveShuffler::Thread => items.choose(&mut rand::thread_rng()).copied(),
            MoveShuffler::Seeded(rng) => items.choose(&mut *rng.borrow_mut()).copied(),
            MoveShuffler::Disabled => items.first().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_shuffler_preserves_order() {
        let shuffler = MoveShuffler::Disabled;
        let mut items = vec![1, 2, 3, 4];

        shuffler.shuffle(&mut items);

        assert_eq!(vec![1, 2, 3, 4], items);
        assert_eq!(Some(1), shuffler.choose(&items));
    }

    #[test]
    fn seeded_shuffler_is_reproducible() {
        let mut first = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let mut second = first.clone();

        MoveShuffler::seeded(42).shuffle(&mut first);
        MoveShuffler::seeded(42).shuffle(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn choose_on_empty_slice_is_none() {
        let shuffler = MoveShuffler::Thread;
        let items: Vec<u8> = Vec::new();

        assert_eq!(None, shuffler.choose(&items));
    }
}
