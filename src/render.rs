//! Dirty-region tracking for host-scheduled repaints.
//!
//! Event handlers never draw. They record *where* the face changed and the
//! host decides when (and whether) to repaint; a mark is advisory, so the
//! host is free to coalesce several marks into one repaint, widen a region,
//! or repaint everything. The core must stay correct under all of those.
//!
//! # Update Strategy
//!
//! | Event | Shared canvas | Per-body regions |
//! |-------|---------------|------------------|
//! | Minute tick | full frame | old + new earth/moon regions |
//! | Battery | full frame | full frame |
//! | Settings message | full frame | full frame |
//! | Resize progress/snap | full frame | full frame |
//!
//! Everything except a per-body minute tick repaints the whole face because
//! the battery arc, tick ring and background span it.

use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

/// Most regions one take can carry: two bodies, each with an old and a new
/// region, with room for a host to add its own marks.
pub const MAX_DIRTY_REGIONS: usize = 8;

/// What the host should repaint, handed over by [`DirtyRegions::take`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Redraw {
    /// Repaint the whole frame.
    Full,
    /// Repaint at least the listed regions, in mark order.
    Partial(Vec<Rectangle, MAX_DIRTY_REGIONS>),
}

/// Accumulates dirty marks between repaints.
///
/// Region marks past [`MAX_DIRTY_REGIONS`] promote the pending state to a
/// full repaint, which is always a correct widening.
#[derive(Debug, Default)]
pub struct DirtyRegions {
    full: bool,
    regions: Vec<Rectangle, MAX_DIRTY_REGIONS>,
}

impl DirtyRegions {
    /// Fresh tracker with nothing pending.
    pub const fn new() -> Self {
        Self {
            full: false,
            regions: Vec::new(),
        }
    }

    /// Mark the whole frame dirty, absorbing any pending regions.
    pub fn mark_full(&mut self) {
        self.full = true;
        self.regions.clear();
    }

    /// Mark one region dirty.
    pub fn mark_region(&mut self, region: Rectangle) {
        if self.full {
            return;
        }
        if self.regions.push(region).is_err() {
            self.mark_full();
        }
    }

    /// Whether any repaint is pending.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.full || !self.regions.is_empty()
    }

    /// Hand the pending repaint to the host and reset to clean.
    pub fn take(&mut self) -> Option<Redraw> {
        if self.full {
            self.full = false;
            self.regions.clear();
            Some(Redraw::Full)
        } else if self.regions.is_empty() {
            None
        } else {
            let regions = core::mem::take(&mut self.regions);
            Some(Redraw::Partial(regions))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
