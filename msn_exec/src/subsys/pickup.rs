//! Pickup actuation subsystem simulation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;

// Internal
use super::{SimActivity, Subsystem};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Pickup unit.
///
/// Waits for the package-presence switch (`pickup_detected`) while enabled,
/// then runs the gripper cycle for a fixed number of ticks and pulses done.
pub struct Pickup {
    act: SimActivity,

    /// Package-presence switch level, set each tick by the executive.
    package_detected: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pickup {
    pub fn new(actuation_ticks: u64) -> Self {
        Self {
            act: SimActivity::new(actuation_ticks),
            package_detected: false,
        }
    }

    /// Set the package-presence switch level for this tick.
    pub fn set_package_detected(&mut self, detected: bool) {
        self.package_detected = detected;
    }

    /// Actuator line, held while the gripper cycle is in progress.
    pub fn pickup_action(&self) -> bool {
        self.act.is_active()
    }
}

impl Subsystem for Pickup {
    fn name(&self) -> &'static str {
        "Pickup"
    }

    fn tick(&mut self, enable: bool) {
        // The gripper cycle only runs once a package is actually present
        let go = enable && self.package_detected;

        if self.act.tick(go) {
            debug!("{}: package secured", self.name());
        }
    }

    fn done(&self) -> bool {
        self.act.done()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_waits_for_package() {
        let mut pu = Pickup::new(2);

        // Enabled but no package: nothing happens
        for _ in 0..5 {
            pu.tick(true);
            assert!(!pu.done());
            assert!(!pu.pickup_action());
        }

        // Package appears: gripper cycle runs to completion
        pu.set_package_detected(true);
        pu.tick(true);
        assert!(pu.pickup_action());
        assert!(!pu.done());

        pu.tick(true);
        assert!(pu.done());
    }

    #[test]
    fn test_action_clears_after_cycle() {
        let mut pu = Pickup::new(1);
        pu.set_package_detected(true);

        pu.tick(true);
        assert!(pu.done());
        assert!(pu.pickup_action());

        pu.tick(true);
        assert!(!pu.pickup_action());
    }
}
