//! RNG module - piece sources
//!
//! Implements the "7-bag" randomizer: each bag holds one of each kind
//! (I, O, T, S, Z, J, L), shuffled, and is drawn from until empty.
//! A fixed repeating cycle is also available for scripted games and tests.
//!
//! Also provides a simple LCG so sequences are reproducible from a seed.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// How a game chooses the kind of each spawned piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceSource {
    /// Shuffled 7-bag seeded with the given value
    SevenBag { seed: u32 },
    /// The listed kinds, repeated forever
    Cycle(Vec<ShapeKind>),
}

#[derive(Debug, Clone)]
enum Dealer {
    Bag {
        bag: [ShapeKind; 7],
        bag_index: usize,
        rng: SimpleRng,
    },
    Cycle {
        kinds: Vec<ShapeKind>,
        index: usize,
    },
}

/// Deterministic stream of shape kinds
#[derive(Debug, Clone)]
pub struct PieceQueue {
    dealer: Dealer,
}

impl PieceQueue {
    /// 7-bag queue with the given seed
    pub fn seven_bag(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut bag = ShapeKind::ALL;
        rng.shuffle(&mut bag);
        Self {
            dealer: Dealer::Bag {
                bag,
                bag_index: 0,
                rng,
            },
        }
    }

    /// Queue that repeats `kinds` in order; an empty list falls back to `I`
    pub fn cycle(kinds: &[ShapeKind]) -> Self {
        let kinds = if kinds.is_empty() {
            vec![ShapeKind::I]
        } else {
            kinds.to_vec()
        };
        Self {
            dealer: Dealer::Cycle { kinds, index: 0 },
        }
    }

    pub fn from_source(source: &PieceSource) -> Self {
        match source {
            PieceSource::SevenBag { seed } => Self::seven_bag(*seed),
            PieceSource::Cycle(kinds) => Self::cycle(kinds),
        }
    }

    /// Peek at the next kind without consuming it
    pub fn peek(&self) -> ShapeKind {
        match &self.dealer {
            Dealer::Bag {
                bag,
                bag_index,
                rng,
            } => {
                if *bag_index < bag.len() {
                    return bag[*bag_index];
                }
                // Preview the next bag with a cloned RNG so the real one stays untouched.
                let mut preview_rng = rng.clone();
                let mut next_bag = ShapeKind::ALL;
                preview_rng.shuffle(&mut next_bag);
                next_bag[0]
            }
            Dealer::Cycle { kinds, index } => kinds[*index],
        }
    }

    /// Draw the next kind
    pub fn draw(&mut self) -> ShapeKind {
        match &mut self.dealer {
            Dealer::Bag {
                bag,
                bag_index,
                rng,
            } => {
                if *bag_index >= bag.len() {
                    *bag = ShapeKind::ALL;
                    rng.shuffle(&mut bag[..]);
                    *bag_index = 0;
                }
                let kind = bag[*bag_index];
                *bag_index += 1;
                kind
            }
            Dealer::Cycle { kinds, index } => {
                let kind = kinds[*index];
                *index = (*index + 1) % kinds.len();
                kind
            }
        }
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::seven_bag(crate::types::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_seven_bag_deals_each_kind_once() {
        let mut queue = PieceQueue::seven_bag(1);

        for _ in 0..3 {
            let mut drawn: Vec<_> = (0..7).map(|_| queue.draw()).collect();
            drawn.sort_by_key(|k| k.index());
            assert_eq!(drawn, ShapeKind::ALL.to_vec());
        }
    }

    #[test]
    fn test_peek_matches_draw_across_bag_boundary() {
        let mut queue = PieceQueue::seven_bag(99);
        for _ in 0..20 {
            let peeked = queue.peek();
            assert_eq!(peeked, queue.draw());
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceQueue::seven_bag(7);
        let mut b = PieceQueue::from_source(&PieceSource::SevenBag { seed: 7 });
        for _ in 0..30 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_cycle_repeats() {
        let mut queue = PieceQueue::cycle(&[ShapeKind::O, ShapeKind::T]);
        let drawn: Vec<_> = (0..5).map(|_| queue.draw()).collect();
        assert_eq!(
            drawn,
            vec![
                ShapeKind::O,
                ShapeKind::T,
                ShapeKind::O,
                ShapeKind::T,
                ShapeKind::O
            ]
        );
        assert_eq!(queue.peek(), ShapeKind::T);
    }

    #[test]
    fn test_empty_cycle_falls_back() {
        let mut queue = PieceQueue::cycle(&[]);
        assert_eq!(queue.draw(), ShapeKind::I);
        assert_eq!(queue.draw(), ShapeKind::I);
    }
}
