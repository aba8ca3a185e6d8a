// src/combat/src/rng.rs
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Number of hex digits after the `0x` prefix of a generated id.
pub const ID_HEX_LEN: usize = 40;

/// Randomness consumed by the battle engine and the hero factory.
///
/// Everything is derived from a single uniform draw so tests can script
/// the exact sequence the engine sees.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Percent roll: succeeds when `unit * 100 <= chance`.
    fn roll_chance(&mut self, chance: u32) -> bool {
        self.next_unit() * 100.0 <= f64::from(chance)
    }

    /// Pick one element of a slice, `None` when the slice is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let idx = ((self.next_unit() * items.len() as f64) as usize).min(items.len() - 1);
        items.get(idx)
    }

    /// Transaction-hash-like identifier: `0x` followed by 40 lowercase hex digits.
    fn random_id(&mut self) -> String {
        let mut id = String::with_capacity(2 + ID_HEX_LEN);
        id.push_str("0x");
        for _ in 0..ID_HEX_LEN {
            let digit = ((self.next_unit() * 16.0) as usize).min(15);
            id.push(HEX_DIGITS[digit] as char);
        }
        id
    }
}

/// PCG32-backed random source. Seeded for reproducible sessions,
/// entropy-seeded otherwise.
#[derive(Debug, Clone)]
pub struct BattleRng {
    rng: Pcg32,
    seed: u64,
}

impl BattleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the sequence from the current seed
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    pub fn reseed(&mut self, new_seed: u64) {
        self.seed = new_seed;
        self.reset();
    }
}

impl Default for BattleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for BattleRng {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Returns true if `id` has the `0x` + 40 hex digit shape produced by
/// [`RandomSource::random_id`].
pub fn is_valid_id(id: &str) -> bool {
    id.strip_prefix("0x").is_some_and(|hex| {
        hex.len() == ID_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit())
    })
}
