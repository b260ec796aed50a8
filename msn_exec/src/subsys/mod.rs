//! # Collaborator subsystem simulations
//!
//! The real colour detection, navigation, infrared, pickup and dropoff units are independent
//! state machines outside this repository - the executive sees each one only through its signal
//! contract. This module models them as tick-counting simulations honouring exactly that
//! contract, so the executive can run complete missions and the handshake glue can be tested
//! without hardware.
//!
//! The four enable-driven units share the [`Subsystem`] capability: a level enable in, one tick
//! of internal processing per call, a single-tick done pulse out once per activation. Navigation
//! is command-driven instead (a [`NavCmd`] in, arrival levels out) and has its own interface.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod colour_detect;
mod dropoff;
mod ir_comm;
mod nav;
mod pickup;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// Internal
pub use colour_detect::*;
pub use dropoff::*;
pub use ir_comm::*;
pub use nav::*;
pub use pickup::*;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Minimal capability shared by the enable/done collaborators.
///
/// The controller's enable line is the only "go" primitive and the done
/// pulse the only reply - a rendezvous, not a queue. A subsystem runs for a
/// collaborator-defined number of ticks once enabled and asserts done
/// exactly once per activation.
pub trait Subsystem {
    /// Subsystem name, used in logs.
    fn name(&self) -> &'static str;

    /// Advance the subsystem by one tick with the controller's enable level.
    fn tick(&mut self, enable: bool);

    /// Completion pulse. Asserted for exactly one tick per activation.
    fn done(&self) -> bool;
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Activation bookkeeping shared by the simulated subsystems.
///
/// A rising enable starts a run of a fixed number of ticks; the tick on
/// which the run completes asserts the done pulse. No new run may start
/// until enable has been dropped, keeping at most one pending activation.
#[derive(Debug, Clone)]
pub struct SimActivity {
    /// Ticks one activation takes to complete.
    run_ticks: u64,

    /// Ticks remaining in the current run, `None` when not running.
    remaining: Option<u64>,

    /// True once this activation has completed, until enable is dropped.
    fired: bool,

    /// Done pulse for the current tick.
    done: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SimActivity {
    pub fn new(run_ticks: u64) -> Self {
        Self {
            run_ticks,
            remaining: None,
            fired: false,
            done: false,
        }
    }

    /// Advance one tick.
    ///
    /// `go` is the enable level gated by any auxiliary condition the
    /// subsystem needs (for example package presence for pickup). Returns
    /// true on the completion tick.
    pub fn tick(&mut self, go: bool) -> bool {
        self.done = false;

        if !go {
            // Enable dropped - abandon any run and re-arm for the next
            // activation
            self.remaining = None;
            self.fired = false;
            return false;
        }

        // Already completed this activation, hold quiet until re-armed
        if self.fired {
            return false;
        }

        let remaining = self.remaining.get_or_insert(self.run_ticks);
        if *remaining > 0 {
            *remaining -= 1;
        }

        if *remaining == 0 {
            self.remaining = None;
            self.fired = true;
            self.done = true;
            return true;
        }

        false
    }

    /// Completion pulse for the current tick.
    pub fn done(&self) -> bool {
        self.done
    }

    /// True while a run is in progress.
    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// True while the unit is actively working or pulsing done this tick.
    pub fn is_active(&self) -> bool {
        self.is_running() || self.done
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_done_pulse_on_completion_tick() {
        let mut act = SimActivity::new(3);

        assert!(!act.tick(true));
        assert!(!act.tick(true));
        assert!(act.tick(true));
        assert!(act.done());
    }

    #[test]
    fn test_done_is_single_tick() {
        let mut act = SimActivity::new(1);

        assert!(act.tick(true));

        // Enable still held: no second pulse, ever
        for _ in 0..10 {
            assert!(!act.tick(true));
            assert!(!act.done());
        }
    }

    #[test]
    fn test_rearm_requires_enable_drop() {
        let mut act = SimActivity::new(2);

        assert!(!act.tick(true));
        assert!(act.tick(true));

        // Held enable: quiet
        assert!(!act.tick(true));

        // Drop and re-assert: a fresh activation runs to completion again
        assert!(!act.tick(false));
        assert!(!act.tick(true));
        assert!(act.tick(true));
    }

    #[test]
    fn test_enable_drop_abandons_run() {
        let mut act = SimActivity::new(5);

        assert!(!act.tick(true));
        assert!(!act.tick(true));
        assert!(!act.tick(false));
        assert!(!act.is_running());

        // Restart runs the full duration again
        assert!(!act.tick(true));
        assert!(!act.tick(true));
        assert!(!act.tick(true));
        assert!(!act.tick(true));
        assert!(act.tick(true));
    }

    #[test]
    fn test_no_done_without_enable() {
        let mut act = SimActivity::new(1);

        for _ in 0..5 {
            assert!(!act.tick(false));
            assert!(!act.done());
        }
    }
}
