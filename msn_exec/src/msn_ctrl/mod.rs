//! # Mission controller module
//!
//! This module implements the top-level task controller for the delivery mission. The mission is a
//! fixed cycle of phases:
//!
//! - `Idle` - Waiting on the starting pad for a pad colour to appear
//! - `ColourIdentify` - The colour detection unit is identifying the pad colour
//! - `NavToDesk` - Navigation is driving the rover to the desk
//! - `IrComm` - The infrared unit is reporting the identified colour to the desk
//! - `Pickup` - The pickup unit is securing the package
//! - `NavToDropoff` - Navigation is driving the rover to the dropoff pad
//! - `Dropoff` - The dropoff unit is releasing the package, after which the mission returns to
//!   `Idle`
//!
//! One collaborator subsystem is enabled at a time through a strict enable/done handshake: the
//! controller raises exactly one enable line (or navigation command) per phase and holds that
//! phase until the active collaborator reports done. The controller never times a collaborator
//! and never retries - a collaborator that never completes holds the mission indefinitely, a
//! limitation left to watchdog supervision above this layer.
//!
//! The controller itself is a synchronous state machine stepped once per executive cycle: a pure
//! transition function ([`next_phase`]), a pure output-control function ([`output_set`]) and a
//! single phase register held in [`MsnCtrl`].

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod cmd;
mod output;
mod phase;
mod state;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// Internal
pub use cmd::*;
pub use output::*;
pub use phase::*;
pub use state::*;
