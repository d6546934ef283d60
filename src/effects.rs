//! Ephemeral spark bursts fired when a string is released.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Sparks spawned per burst.
pub const BURST_COUNT: usize = 30;
/// Downward acceleration per frame, screen pixels.
pub const GRAVITY: f32 = 0.1;
/// Life lost per frame; a full-life spark survives ~50 frames.
pub const DECAY: f32 = 0.02;

/// One short-lived spark.
///
/// `life` starts at 1 and falls to 0; renderers draw a filled circle with
/// opacity equal to the remaining life fraction.
#[derive(Clone, Debug)]
pub struct Spark<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub size: F,
    pub life: F,
    pub color: [u8; 3],
}

/// The shared spark collection: burst in, decay linearly, drop at zero.
///
/// All mutation happens inside `burst` and `tick`; the randomness is a
/// seeded generator so replays with the same seed are identical.
pub struct SparkField<F: Float> {
    sparks: AllocVec<Spark<F>>,
    rng: SmallRng,
}

impl<F: Float> SparkField<F> {
    pub fn new(seed: u64) -> Self {
        SparkField {
            sparks: AllocVec::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Spawn a burst of [`BURST_COUNT`] sparks at `origin`.
    ///
    /// Velocities are uniform in a bounded range with a slight upward bias
    /// so gravity arcs them; sizes are uniform in [1, 4] pixels.
    pub fn burst(&mut self, origin: Vec2<F>, color: [u8; 3]) {
        for _ in 0..BURST_COUNT {
            let vx = self.rng.random_range(-2.0f32..2.0);
            let vy = self.rng.random_range(-3.0f32..1.0);
            let size = self.rng.random_range(1.0f32..4.0);
            self.sparks.push(Spark {
                pos: origin,
                vel: Vec2::new(F::from_f32(vx), F::from_f32(vy)),
                size: F::from_f32(size),
                life: F::one(),
                color,
            });
        }
    }

    /// Age every spark one frame and drop the dead ones.
    ///
    /// Integration first, then a single `retain` compaction: removal can
    /// never skip or double-process a survivor in the same tick.
    pub fn tick(&mut self) {
        let gravity = F::from_f32(GRAVITY);
        let decay = F::from_f32(DECAY);
        for s in &mut self.sparks {
            s.vel.y = s.vel.y + gravity;
            s.pos += s.vel;
            s.life = s.life - decay;
        }
        self.sparks.retain(|s| s.life > F::zero());
    }

    pub fn sparks(&self) -> &[Spark<F>] {
        &self.sparks
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty()
    }
}
