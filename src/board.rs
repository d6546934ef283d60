//! Session orchestrator: the string collection, drag state, and frame tick.

use crate::chain::PluckChain;
use crate::config::Tuning;
use crate::error::TwangError;
use crate::float::Float;
use crate::observer::PluckObserver;
use crate::pointer::Region;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A board of pluckable strings plus the single active drag.
///
/// Owns every chain and its screen region explicitly; nothing hangs off
/// rendering handles. Pointer entry points mutate drag state between frames
/// and `tick` advances the simulation once per display refresh. At most one
/// chain is drag-owned at a time, and each drag session fires `on_pluck`
/// exactly once per chain it touched.
pub struct StringBoard<F: Float> {
    chains: AllocVec<PluckChain<F>>,
    regions: AllocVec<Region<F>>,
    tuning: Tuning<F>,
    pressed: bool,
    target: Option<usize>,
    cursor: Vec2<F>,
}

impl<F: Float> StringBoard<F> {
    /// Build `count` identical strings at rest.
    pub fn new(count: usize, segments: usize, tuning: Tuning<F>) -> Result<Self, TwangError> {
        let mut chains = AllocVec::with_capacity(count);
        for _ in 0..count {
            chains.push(PluckChain::new(segments, &tuning)?);
        }
        let regions = (0..count).map(|_| Region::default()).collect();
        Ok(StringBoard {
            chains,
            regions,
            tuning,
            pressed: false,
            target: None,
            cursor: Vec2::zero(),
        })
    }

    /// Replace every string's screen region, e.g. after a viewport resize.
    pub fn set_regions(&mut self, regions: &[Region<F>]) -> Result<(), TwangError> {
        if regions.len() != self.chains.len() {
            return Err(TwangError::RegionCountMismatch {
                regions: regions.len(),
                strings: self.chains.len(),
            });
        }
        self.regions.clear();
        self.regions.extend_from_slice(regions);
        Ok(())
    }

    /// Pointer pressed. Acquires the first string whose region contains the
    /// point (declaration order wins on overlap) and bends it.
    pub fn pointer_down<O: PluckObserver<F>>(&mut self, x: F, y: F, observer: &mut O) {
        self.pressed = true;
        self.cursor = Vec2::new(x, y);
        self.retarget(observer);
        self.bend_target();
    }

    /// Pointer moved. While pressed, re-bends the current target; crossing
    /// into a different string's region releases the old target (firing its
    /// pluck mid-drag) and acquires the new one with no idle gap.
    pub fn pointer_move<O: PluckObserver<F>>(&mut self, x: F, y: F, observer: &mut O) {
        self.cursor = Vec2::new(x, y);
        if !self.pressed {
            return;
        }
        self.retarget(observer);
        self.bend_target();
    }

    /// Pointer released. Fires the target's pluck and clears the drag.
    pub fn pointer_up<O: PluckObserver<F>>(&mut self, observer: &mut O) {
        self.pressed = false;
        if let Some(index) = self.target.take() {
            self.chains[index].end_drag();
            observer.on_pluck(index, self.cursor);
        }
    }

    /// One frame: relax every chain the drag doesn't own.
    ///
    /// Never fails; a dragged chain skips integration inside `relax`.
    pub fn tick<O: PluckObserver<F>>(&mut self, observer: &mut O) {
        for chain in &mut self.chains {
            chain.relax(&self.tuning);
        }
        observer.on_frame();
    }

    fn retarget<O: PluckObserver<F>>(&mut self, observer: &mut O) {
        // Leaving every region keeps the current target bent until release;
        // only entering a different string hands off.
        let Some(hit) = self.hit_test(self.cursor) else {
            return;
        };
        if Some(hit) == self.target {
            return;
        }
        if let Some(old) = self.target {
            self.chains[old].end_drag();
            observer.on_pluck(old, self.cursor);
        }
        self.chains[hit].begin_drag();
        self.target = Some(hit);
    }

    fn bend_target(&mut self) {
        if let Some(index) = self.target {
            let pull = self.regions[index].normalized(self.cursor);
            self.chains[index].bend(pull.x, pull.y);
        }
    }

    fn hit_test(&self, p: Vec2<F>) -> Option<usize> {
        self.regions.iter().position(|r| r.contains(p))
    }

    pub fn string_count(&self) -> usize {
        self.chains.len()
    }

    pub fn chain(&self, index: usize) -> &PluckChain<F> {
        &self.chains[index]
    }

    pub fn region(&self, index: usize) -> &Region<F> {
        &self.regions[index]
    }

    /// Index of the drag-owned string, if any.
    pub fn dragged(&self) -> Option<usize> {
        self.target
    }

    pub fn tuning(&self) -> &Tuning<F> {
        &self.tuning
    }
}
