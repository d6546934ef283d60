//! Observer trait for reacting to board events.

use crate::float::Float;
use crate::vec::Vec2;

/// Trait for observing plucks and frame completion.
///
/// Implement this to fire release side-effects (tone, spark burst) without
/// the board knowing about audio or rendering. All methods have default
/// no-op implementations.
pub trait PluckObserver<F: Float> {
    /// Called exactly once per drag session per string, on release or
    /// hand-off. `at` is the pointer position in screen space.
    fn on_pluck(&mut self, _string: usize, _at: Vec2<F>) {}

    /// Called when a frame tick is fully complete.
    fn on_frame(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no side-effects
/// are wanted.
pub struct NoOpPluckObserver;

impl<F: Float> PluckObserver<F> for NoOpPluckObserver {}
