// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_imaging_ref --heading-base-level=0

//! Understory Imaging Reference Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`ImagingBackend`] and [`ResourceBackend`]
//! for **IR recording and state tracing**.
//!
//! It is intentionally *not* a “reference renderer”:
//! - It does **not** rasterize to pixels.
//! - It does **not** establish “golden” rendering behavior across backends.
//! - It is intended primarily for tests and debugging that want to assert on
//!   emitted ops, the render target they landed in, and the clip active at
//!   the time.
//!
//! Unlike a forgiving backend, it panics on resource misuse (drawing into a
//! destroyed target, nesting targets, ending a target that was never begun)
//! so callers' bookkeeping bugs surface in tests.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use understory_imaging::{
    DrawOp, ImagingBackend, ImagingOp, RectI, ResourceBackend, StateOp, TargetDesc, TargetId,
};

/// Snapshot of the current imaging state inside the backend.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Render target receiving draws, or `None` for the screen.
    pub target: Option<TargetId>,
    /// Current clip rectangle, if any.
    pub clip: Option<RectI>,
}

/// Event recorded by the reference backend.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Simple reference implementation of the imaging backend.
///
/// This backend:
/// - Stores target descriptors in a vector keyed by their IDs,
/// - Tracks the active target and clip,
/// - Records high-level [`Event`]s as state and draw operations are applied.
#[derive(Default, Debug)]
pub struct RefBackend {
    targets: Vec<Option<TargetDesc>>,
    destroyed: usize,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying imaging ops.
    ops: Vec<ImagingOp>,
    /// Current imaging state.
    state: StateSnapshot,
}

impl RefBackend {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw imaging operations.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Clears all recorded events and ops but keeps resources.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    /// Returns the current imaging state.
    pub fn state_snapshot(&self) -> StateSnapshot {
        self.state
    }

    /// Number of targets created and not yet destroyed.
    pub fn live_targets(&self) -> usize {
        self.targets.iter().filter(|t| t.is_some()).count()
    }

    /// Number of targets destroyed over the backend's lifetime.
    pub fn destroyed_targets(&self) -> usize {
        self.destroyed
    }

    /// Returns the descriptor of a live target.
    pub fn target_desc(&self, id: TargetId) -> Option<&TargetDesc> {
        self.targets.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Rectangles filled while `target` was active, in draw order.
    pub fn fills_in(&self, target: TargetId) -> impl Iterator<Item = RectI> + '_ {
        self.events.iter().filter_map(move |ev| match ev {
            Event::Draw {
                op: DrawOp::FillRect { rect, .. },
                state,
            } if state.target == Some(target) => Some(*rect),
            _ => None,
        })
    }

    /// Rectangles filled directly on the screen, in draw order.
    pub fn screen_fills(&self) -> impl Iterator<Item = RectI> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            Event::Draw {
                op: DrawOp::FillRect { rect, .. },
                state,
            } if state.target.is_none() => Some(*rect),
            _ => None,
        })
    }

    /// Target copies as `(source, destination, clip)`, in draw order.
    pub fn copies(&self) -> impl Iterator<Item = (TargetId, RectI, Option<RectI>)> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            Event::Draw {
                op: DrawOp::CopyTarget { target, dst },
                state,
            } => Some((*target, *dst, state.clip)),
            _ => None,
        })
    }

    fn assert_live(&self, id: TargetId, what: &str) {
        assert!(
            self.target_desc(id).is_some(),
            "RefBackend: {what} on target {id:?} which is not alive"
        );
    }
}

impl ResourceBackend for RefBackend {
    fn create_target(&mut self, desc: TargetDesc) -> TargetId {
        let id = u32::try_from(self.targets.len())
            .expect("RefBackend: too many targets for u32 TargetId");
        self.targets.push(Some(desc));
        TargetId(id)
    }

    fn destroy_target(&mut self, id: TargetId) {
        assert!(
            self.state.target != Some(id),
            "RefBackend: destroying target {id:?} while it is active"
        );
        let idx = id.0 as usize;
        if let Some(slot) = self.targets.get_mut(idx)
            && slot.take().is_some()
        {
            self.destroyed += 1;
        }
    }
}

impl ImagingBackend for RefBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::BeginTarget(id) => {
                assert!(
                    self.state.target.is_none(),
                    "RefBackend: targets do not nest"
                );
                self.assert_live(*id, "begin");
                self.state.target = Some(*id);
            }
            StateOp::EndTarget => {
                let ended = self.state.target.take();
                assert!(ended.is_some(), "RefBackend: end without an active target");
            }
            StateOp::SetClip(rect) => self.state.clip = Some(*rect),
            StateOp::ClearClip => self.state.clip = None,
        }

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state,
        });
    }

    fn draw(&mut self, op: DrawOp) {
        if let Some(target) = self.state.target {
            self.assert_live(target, "draw");
        }
        if let DrawOp::CopyTarget { target, .. } = &op {
            self.assert_live(*target, "copy");
        }
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state,
        });
    }
}
