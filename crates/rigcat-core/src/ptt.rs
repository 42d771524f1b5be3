//! PTT (push-to-talk) control state machine.
//!
//! PTT can be keyed three ways: through the rig's own command protocol
//! (CAT), or by toggling the DTR or RTS serial line out-of-band. The
//! controller is a pure planner: [`PttController::plan`] decides what
//! action a requested transition requires, the session performs the I/O,
//! and [`PttController::commit`] records the new state only after the I/O
//! succeeded. A failed keying attempt therefore leaves the recorded state
//! untouched.

use crate::types::{ControlLine, PttMethod, PttState};

/// The wire action a PTT transition requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PttAction {
    /// No wire traffic (method is `NONE`). The transition is not recorded.
    NoOp,
    /// Key via the rig's command protocol: the session encodes and sends
    /// the codec's native PTT command.
    CatCommand,
    /// Key via a serial control line, bypassing the command protocol.
    ToggleLine {
        /// Which line to toggle.
        line: ControlLine,
        /// `true` asserts the line (transmit), `false` de-asserts it.
        asserted: bool,
    },
}

/// Tracks the active PTT method and the last successfully commanded state.
///
/// The recorded state is what a `PTT` query reports; it reflects what this
/// session commanded, not a readback from the rig.
#[derive(Debug, Clone, Copy, Default)]
pub struct PttController {
    method: PttMethod,
    state: PttState,
}

impl PttController {
    /// Create a controller with the given initial method, in the
    /// receive state.
    pub fn new(method: PttMethod) -> Self {
        PttController {
            method,
            state: PttState::Off,
        }
    }

    /// The currently selected PTT method.
    pub fn method(&self) -> PttMethod {
        self.method
    }

    /// The last successfully commanded PTT state.
    pub fn state(&self) -> PttState {
        self.state
    }

    /// Select a new PTT method. Pure session state; no rig I/O.
    pub fn set_method(&mut self, method: PttMethod) {
        self.method = method;
    }

    /// Decide what action keying to `target` requires under the active
    /// method. Does not change any state.
    pub fn plan(&self, target: PttState) -> PttAction {
        match self.method {
            PttMethod::None => PttAction::NoOp,
            PttMethod::Cat => PttAction::CatCommand,
            PttMethod::Dtr => PttAction::ToggleLine {
                line: ControlLine::Dtr,
                asserted: target == PttState::On,
            },
            PttMethod::Rts => PttAction::ToggleLine {
                line: ControlLine::Rts,
                asserted: target == PttState::On,
            },
        }
    }

    /// Record a transition after its wire action succeeded.
    ///
    /// Must not be called for a [`PttAction::NoOp`] plan or after a failed
    /// action; the session enforces both.
    pub fn commit(&mut self, target: PttState) {
        self.state = target;
    }
}
