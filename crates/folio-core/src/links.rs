//! Random link pool for the person icon

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Pool of external links with its own random source.
///
/// Seeding makes the sequence of picks reproducible, which the desktop
/// binary exposes as `--seed`.
pub struct LinkPool {
    links: Vec<String>,
    rng: Mutex<StdRng>,
}

impl LinkPool {
    /// Pool seeded from the operating system.
    pub fn new(links: Vec<String>) -> Self {
        Self {
            links,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Pool with a deterministic random source.
    pub fn seeded(links: Vec<String>, seed: u64) -> Self {
        Self {
            links,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Pick one link uniformly at random, or `None` if the pool is empty.
    pub fn random_link(&self) -> Option<String> {
        let mut rng = self.rng.lock();
        self.links.choose(&mut *rng).cloned()
    }
}

impl std::fmt::Debug for LinkPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkPool").field("links", &self.links).finish()
    }
}
