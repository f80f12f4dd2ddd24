//! The `RND` generator.
//!
//! A 33-bit shift register: the 32-bit word `lastrandom` plus one overflow
//! bit. Each step shifts left by one, feeding in bit 19 XOR the bit shifted
//! out on the previous step. One advance is 32 steps. The recurrence matches
//! BBC BASIC II so seeded sequences replay identically.

/// Generator state. One per interpreter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prng {
    lastrandom: u32,
    overflow: u32,
}

impl Prng {
    /// Seed exactly as `RND(-n)` does: the word takes the seed's bits and the
    /// overflow bit is cleared.
    pub fn seeded(seed: i32) -> Self {
        Prng {
            lastrandom: seed as u32,
            overflow: 0,
        }
    }

    /// Seed from the system clock.
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.subsec_nanos() ^ (d.as_secs() as u32));
        Prng::seeded(nanos as i32)
    }

    pub fn reseed(&mut self, seed: i32) {
        *self = Prng::seeded(seed);
    }

    /// Run the recurrence 32 times.
    pub fn advance(&mut self) {
        for _ in 0..32 {
            let newbit = ((self.lastrandom >> 19) ^ self.overflow) & 1;
            self.overflow = self.lastrandom >> 31;
            self.lastrandom = (self.lastrandom << 1) | newbit;
        }
    }

    /// The current word as `RND` returns it.
    pub fn last(&self) -> i32 {
        self.lastrandom as i32
    }

    pub fn overflow(&self) -> u32 {
        self.overflow
    }

    /// The current word with its bytes reversed, scaled into `[0, 1)`.
    /// Does not advance.
    pub fn fraction(&self) -> f64 {
        f64::from(self.lastrandom.swap_bytes()) / 4_294_967_296.0
    }
}

#[cfg(test)]
mod tests;
