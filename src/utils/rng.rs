use rand::{prelude::*, rngs::StdRng};

#[cfg(debug_assertions)]
pub fn make_rng() -> StdRng {
    const SEED: u64 = 63;
    StdRng::seed_from_u64(SEED)
}

#[cfg(not(debug_assertions))]
pub fn make_rng() -> StdRng {
    use rand::{rngs::SysRng, TryRng};
    match SysRng::try_next_u64(&mut SysRng) {
        Ok(seed) => StdRng::seed_from_u64(seed),
        Err(e) => {
            log::warn!("system entropy unavailable ({}), seeding from the clock", e);
            StdRng::seed_from_u64(clock_seed())
        }
    }
}

/// Rng for a game, replayable when a seed is given
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => make_rng(),
    }
}

#[cfg(not(debug_assertions))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
