//! RNG module - C `rand()` compatible random sources
//!
//! The generators only need uniform integers in `[0, RAND_MAX]` and take them
//! through [`RandSource`]. Reproducing an image pixel for pixel requires the
//! same source and the same `RAND_MAX`; any other uniform source works too.
//!
//! Also provides a replaying source for deterministic testing.

/// Largest value a [`RandSource`] returns.
pub const RAND_MAX: u32 = 32767;

/// Source of uniform integers in `[0, RAND_MAX]`.
pub trait RandSource {
    /// Next value in `[0, RAND_MAX]`.
    fn rand(&mut self) -> u32;

    /// Next value scaled into `[0.0, 1.0]`.
    fn unit(&mut self) -> f64 {
        f64::from(self.rand()) / f64::from(RAND_MAX)
    }
}

impl<R: RandSource + ?Sized> RandSource for &mut R {
    fn rand(&mut self) -> u32 {
        (**self).rand()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses the constants of the ANSI C reference `rand()`
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the LCG and return the raw 32 bit state
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345);
        self.state
    }

    /// Current state, usable as a seed to resume the same sequence
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandSource for SimpleRng {
    fn rand(&mut self) -> u32 {
        (self.next_u32() >> 16) & RAND_MAX
    }
}

/// Replays a fixed list of values forever.
#[derive(Debug, Clone)]
pub struct SequenceRand {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRand {
    /// Build a replaying source. An empty list replays zeros.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0);
        }
        Self { values, pos: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RandSource for SequenceRand {
    fn rand(&mut self) -> u32 {
        let v = self.values[self.pos] % (RAND_MAX + 1);
        self.pos = (self.pos + 1) % self.values.len();
        v
    }
}
