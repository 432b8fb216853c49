//! Randomness used by the store: identifier generation and option picks.
//!
//! Both draw from a [`RandomSource`] so callers can inject a deterministic
//! sequence instead of OS entropy.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of generated identifiers, in base-36 digits.
pub const ID_LENGTH: usize = 8;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// OS-seeded generator used by the binary.
#[derive(Debug)]
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Deterministic source: scripted draws are consumed first, then a seeded
/// generator takes over.
///
/// # Example
///
/// ```
/// use promptforge::random::{RandomSource, ScriptedRandom};
///
/// let mut random = ScriptedRandom::seeded(7);
/// random.script([0.9]);
/// assert_eq!(random.next_unit(), 0.9);
/// ```
#[derive(Debug)]
pub struct ScriptedRandom {
    scripted: VecDeque<f64>,
    fallback: StdRng,
}

impl ScriptedRandom {
    pub fn seeded(seed: u64) -> Self {
        Self {
            scripted: VecDeque::new(),
            fallback: StdRng::seed_from_u64(seed),
        }
    }

    /// Queue draws to be returned before falling back to the seeded generator.
    /// Values are clamped into `[0, 1)`.
    pub fn script<I>(&mut self, draws: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.scripted.extend(draws.into_iter().map(clamp_unit));
    }

    pub fn pending(&self) -> usize {
        self.scripted.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        match self.scripted.pop_front() {
            Some(value) => value,
            None => self.fallback.random::<f64>(),
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else if value >= 1.0 {
        1.0 - f64::EPSILON
    } else {
        value
    }
}

/// Generate a short opaque identifier: the leading base-36 digits of one draw.
pub fn generate_id<R: RandomSource + ?Sized>(random: &mut R) -> String {
    let mut fraction = clamp_unit(random.next_unit());
    let mut id = String::with_capacity(ID_LENGTH);
    for _ in 0..ID_LENGTH {
        fraction *= 36.0;
        let digit = (fraction.floor() as usize).min(35);
        fraction -= digit as f64;
        id.push(BASE36_DIGITS[digit] as char);
    }
    id
}

/// Map one draw onto an index in `0..len`. Returns `None` when `len` is zero.
pub fn pick_index<R: RandomSource + ?Sized>(random: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let draw = clamp_unit(random.next_unit());
    Some(((draw * len as f64).floor() as usize).min(len - 1))
}
