//! Seeded random request-batch generation.
//!
//! Property tests and the `scanbench` demo both need arbitrary-but-
//! reproducible request batches: same seed, same batch.  Pickup and
//! drop-off floors are always distinct, matching what the control layer
//! enforces for real requests.

use lift_core::{Floor, Person, SimRng};

/// Generate `count` random people with distinct pickup/drop-off floors in
/// `0..=top_floor`, named `p00`, `p01`, …
///
/// Requires `top_floor >= 1`; with a single floor no valid trip exists.
pub fn random_batch(rng: &mut SimRng, count: usize, top_floor: u32) -> Vec<Person> {
    debug_assert!(top_floor >= 1, "need at least two floors for a valid trip");
    (0..count)
        .map(|i| {
            let pickup = rng.gen_range(0..=top_floor);
            let drop_off = loop {
                let f = rng.gen_range(0..=top_floor);
                if f != pickup {
                    break f;
                }
            };
            Person::new(format!("p{i:02}"), Floor(pickup), Floor(drop_off))
        })
        .collect()
}
