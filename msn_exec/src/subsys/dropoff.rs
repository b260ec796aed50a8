//! Dropoff actuation subsystem simulation

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

/// Dropoff unit.
///
/// While enabled it runs the release cycle for a fixed number of ticks and
/// pulses done once the package has been set down.
pub struct Dropoff {
    act: SimActivity,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Dropoff {
    pub fn new(actuation_ticks: u64) -> Self {
        Self {
            act: SimActivity::new(actuation_ticks),
        }
    }

    /// Actuator line, held while the release cycle is in progress.
    pub fn dropoff_action(&self) -> bool {
        self.act.is_active()
    }
}

impl Subsystem for Dropoff {
    fn name(&self) -> &'static str {
        "Dropoff"
    }

    fn tick(&mut self, enable: bool) {
        if self.act.tick(enable) {
            debug!("{}: package released", self.name());
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
    fn test_release_cycle() {
        let mut df = Dropoff::new(3);

        df.tick(true);
        df.tick(true);
        assert!(df.dropoff_action());
        assert!(!df.done());

        df.tick(true);
        assert!(df.done());

        df.tick(true);
        assert!(!df.dropoff_action());
        assert!(!df.done());
    }
}
