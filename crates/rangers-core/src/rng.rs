//! Random source used by every engine.
//!
//! All randomness flows through one seeded generator passed by `&mut`
//! into each call, so a seed reproduces the whole game.

use rand::seq::SliceRandom;
use rand::Rng;

/// Random primitives the simulation relies on.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn float(&mut self) -> f64;

    /// Uniform float in `[min, max)`. Returns `min` for an empty range.
    fn float_range(&mut self, min: f64, max: f64) -> f64;

    /// Uniform integer in `[min, max]`. Returns `min` for an empty range.
    fn int_range(&mut self, min: u32, max: u32) -> u32;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    fn shuffle<T>(&mut self, items: &mut [T]);

    /// True with the given probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.float() < probability
    }

    fn coin_flip(&mut self) -> bool {
        self.chance(0.5)
    }

    /// Pick an element with probability proportional to its weight.
    fn pick_weighted<'a, T>(&mut self, options: &'a [(T, f64)]) -> Option<&'a T> {
        let total: f64 = options.iter().map(|(_, w)| w.max(0.0)).sum();
        if total <= 0.0 {
            return options.first().map(|(v, _)| v);
        }
        let mut roll = self.float() * total;
        for (value, weight) in options {
            let weight = weight.max(0.0);
            if roll < weight {
                return Some(value);
            }
            roll -= weight;
        }
        options.last().map(|(v, _)| v)
    }

    /// Uniformly chosen element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        items.get(i)
    }
}

impl<R: Rng> RandomSource for R {
    fn float(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn float_range(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        self.gen_range(min..max)
    }

    fn int_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.gen_range(min..=max)
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

/// Visit indices `0..len` from a random start in a random direction,
/// wrapping around, and return the first index accepted by `pred`.
///
/// Every index is visited at most once. A single-element range is checked
/// without consuming randomness.
pub fn rand_iterate_index<R: RandomSource + ?Sized>(
    rng: &mut R,
    len: usize,
    mut pred: impl FnMut(&mut R, usize) -> bool,
) -> Option<usize> {
    match len {
        0 => return None,
        1 => return pred(rng, 0).then_some(0),
        _ => {}
    }

    let mut i = rng.index(len);
    let forward = rng.coin_flip();
    for _ in 0..len {
        if pred(rng, i) {
            return Some(i);
        }
        i = if forward {
            (i + 1) % len
        } else {
            (i + len - 1) % len
        };
    }
    None
}

/// Slice version of [`rand_iterate_index`].
pub fn rand_iterate<'a, T, R: RandomSource + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    mut pred: impl FnMut(&mut R, &T) -> bool,
) -> Option<&'a T> {
    rand_iterate_index(rng, items.len(), |rng, i| pred(rng, &items[i])).map(|i| &items[i])
}
