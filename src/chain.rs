//! A pluckable string built from an ordered chain of mass points.

use crate::config::Tuning;
use crate::error::TwangError;
use crate::float::Float;
use crate::point::PluckPoint;
use alloc::vec::Vec as AllocVec;

/// An ordered chain of `segments + 1` mass points forming one visual string.
///
/// The endpoints are pinned and never move. Interior points relax toward
/// their rest displacement each frame unless the chain is being dragged, in
/// which case the drag kernel sets them directly and integration is skipped.
pub struct PluckChain<F: Float> {
    points: AllocVec<PluckPoint<F>>,
    dragging: bool,
}

impl<F: Float> PluckChain<F> {
    /// Build a straight chain at rest.
    ///
    /// Point `i` sits at `x = i / segments`; segment count is fixed for the
    /// chain's lifetime.
    pub fn new(segments: usize, tuning: &Tuning<F>) -> Result<Self, TwangError> {
        if segments < 2 {
            return Err(TwangError::InsufficientSegments);
        }
        tuning.validate()?;

        let seg = F::from_f32(segments as f32);
        let mut points = AllocVec::with_capacity(segments + 1);
        for i in 0..=segments {
            let x = F::from_f32(i as f32) / seg;
            points.push(PluckPoint::new(x, tuning.rest));
        }

        Ok(PluckChain { points, dragging: false })
    }

    /// Advance every interior point one integration step.
    ///
    /// No-op while dragging: the kernel owns the displacements then.
    pub fn relax(&mut self, tuning: &Tuning<F>) {
        if self.dragging {
            return;
        }
        let last = self.points.len() - 1;
        for p in &mut self.points[1..last] {
            p.integrate(tuning.stiffness, tuning.damping);
        }
    }

    /// Apply the drag falloff kernel around the pulled position.
    ///
    /// `pull_x`/`pull_y` are normalized coordinates relative to the string's
    /// bounding box; a pointer outside the box just lands the center beyond
    /// the endpoints, weakening the pull. The point nearest `pull_x` takes
    /// the full deflection; influence decays quadratically and dies off half
    /// a chain away.
    pub fn bend(&mut self, pull_x: F, pull_y: F) {
        let segments = self.segment_count();
        let seg = F::from_f32(segments as f32);
        let center = (pull_x * seg).round();
        let half = seg / F::two();

        for (i, p) in self.points.iter_mut().enumerate() {
            if i == 0 || i == segments {
                continue;
            }
            let dist = (F::from_f32(i as f32) - center).abs();
            let fall = (F::one() - dist / half).max(F::zero());
            p.deflect(pull_y, fall * fall);
        }
    }

    /// Mark the chain as drag-owned; integration pauses until release.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Return the chain to the integrator.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True when every interior point is within `eps` of its rest value.
    pub fn is_settled(&self, eps: F) -> bool {
        let last = self.points.len() - 1;
        self.points[1..last]
            .iter()
            .all(|p| p.offset().abs() < eps && p.velocity.abs() < eps)
    }

    pub fn points(&self) -> &[PluckPoint<F>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    pub fn point(&self, index: usize) -> &PluckPoint<F> {
        &self.points[index]
    }
}
