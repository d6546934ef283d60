//! Configuration types for the string simulation.

use crate::error::TwangError;
use crate::float::Float;

/// Tuning constants for the damped-oscillator integration.
///
/// The step is fixed per frame, not scaled by elapsed time: settle speed
/// tracks the display refresh rate. That matches the feel the constants
/// were chosen for, so resist the urge to multiply by dt.
///
/// # Builder Pattern
/// ```
/// use twangy::Tuning;
///
/// let tuning: Tuning<f32> = Tuning::new()
///     .with_stiffness(0.1)
///     .with_damping(0.9);
/// assert!(tuning.validate().is_ok());
/// ```
pub struct Tuning<F: Float> {
    /// Spring pull toward rest, per frame. Default: 0.1.
    pub stiffness: F,
    /// Velocity retained after each step, [0, 1). Default: 0.9.
    pub damping: F,
    /// Equilibrium displacement every point springs back to. Default: 0.5.
    pub rest: F,
}

impl<F: Float> Tuning<F> {
    /// Create a tuning with the stock constants.
    pub fn new() -> Self {
        Tuning {
            stiffness: F::from_f32(0.1),
            damping: F::from_f32(0.9),
            rest: F::half(),
        }
    }

    /// Set the stiffness.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the rest displacement.
    pub fn with_rest(mut self, rest: F) -> Self {
        self.rest = rest;
        self
    }

    /// Check that the constants converge instead of blowing up.
    pub fn validate(&self) -> Result<(), TwangError> {
        if !(self.stiffness > F::zero() && self.stiffness <= F::one()) {
            return Err(TwangError::InvalidStiffness);
        }
        if self.damping.abs() >= F::one() {
            return Err(TwangError::InvalidDamping);
        }
        Ok(())
    }
}

impl<F: Float> Default for Tuning<F> {
    fn default() -> Self {
        Self::new()
    }
}
