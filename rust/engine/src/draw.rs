use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::errors::KenoError;

/// Size of the keno board.
pub const TOTAL_NUMBERS: u8 = 80;
/// Numbers drawn per round.
pub const DRAW_COUNT: u8 = 20;
/// Numbers chosen by a quick pick.
pub const QUICK_PICK_COUNT: u8 = 10;

/// Draws `count` distinct numbers from `1..=max`, sorted ascending.
///
/// Uses the thread-local CSPRNG. Every call is independent; there is no way
/// to reproduce a result.
///
/// # Errors
///
/// Returns [`KenoError::InvalidDrawRange`] when `count` is zero or larger than
/// `max`.
///
/// # Examples
///
/// ```
/// use keno_engine::draw::generate_draw_numbers;
///
/// let drawn = generate_draw_numbers(20, 80).unwrap();
/// assert_eq!(drawn.len(), 20);
/// assert!(drawn.windows(2).all(|w| w[0] < w[1]));
/// assert!(generate_draw_numbers(81, 80).is_err());
/// ```
pub fn generate_draw_numbers(count: u8, max: u8) -> Result<Vec<u8>, KenoError> {
    draw_with_rng(&mut rand::rng(), count, max)
}

/// The round draw: 20 of 80.
pub fn default_draw() -> Vec<u8> {
    sample_sorted(&mut rand::rng(), DRAW_COUNT, TOTAL_NUMBERS)
}

/// A 10-of-80 quick pick, drawn independently of any round draw.
pub fn quick_pick() -> Vec<u8> {
    sample_sorted(&mut rand::rng(), QUICK_PICK_COUNT, TOTAL_NUMBERS)
}

/// Draws from a caller-supplied cryptographic generator.
pub fn draw_with_rng<R>(rng: &mut R, count: u8, max: u8) -> Result<Vec<u8>, KenoError>
where
    R: Rng + CryptoRng,
{
    if count == 0 || count > max {
        return Err(KenoError::InvalidDrawRange { count, max });
    }
    Ok(sample_sorted(rng, count, max))
}

// Shuffles the full pool and keeps a prefix; caller guarantees 1 <= count <= max.
fn sample_sorted<R>(rng: &mut R, count: u8, max: u8) -> Vec<u8>
where
    R: Rng + CryptoRng,
{
    let mut pool: Vec<u8> = (1..=max).collect();
    pool.shuffle(rng);
    pool.truncate(count as usize);
    pool.sort_unstable();
    pool
}

/// Owns the generator used for a session's draws and quick picks.
#[derive(Debug, Clone)]
pub struct Drawer {
    rng: ChaCha20Rng,
    seed: Option<u64>,
}

impl Drawer {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_os_rng(),
            seed: None,
        }
    }

    /// Reproducible stream for simulations and tests.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new_with_seed(s),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn draw(&mut self) -> Vec<u8> {
        sample_sorted(&mut self.rng, DRAW_COUNT, TOTAL_NUMBERS)
    }

    pub fn quick_pick(&mut self) -> Vec<u8> {
        sample_sorted(&mut self.rng, QUICK_PICK_COUNT, TOTAL_NUMBERS)
    }

    pub fn draw_numbers(&mut self, count: u8, max: u8) -> Result<Vec<u8>, KenoError> {
        draw_with_rng(&mut self.rng, count, max)
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::from_entropy()
    }
}
