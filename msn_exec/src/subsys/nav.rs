//! Navigation subsystem simulation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;

// Internal
use crate::msn_ctrl::NavCmd;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Navigation unit.
///
/// Unlike the enable-driven collaborators, navigation is commanded with a
/// [`NavCmd`] and replies with per-target arrival levels. A transit runs for
/// a fixed number of ticks per target; the arrival level is held while the
/// commanding [`NavCmd`] remains asserted and clears when the command
/// changes.
pub struct Nav {
    /// Transit duration to the desk.
    desk_transit_ticks: u64,

    /// Transit duration to the dropoff pad.
    dropoff_transit_ticks: u64,

    /// The command currently being executed.
    cmd: NavCmd,

    /// Ticks remaining in the current transit.
    remaining: u64,

    /// True once the current transit has completed.
    arrived: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Nav {
    pub fn new(desk_transit_ticks: u64, dropoff_transit_ticks: u64) -> Self {
        Self {
            desk_transit_ticks,
            dropoff_transit_ticks,
            cmd: NavCmd::None,
            remaining: 0,
            arrived: false,
        }
    }

    /// Advance the subsystem by one tick with the controller's current
    /// navigation command.
    pub fn tick(&mut self, cmd: NavCmd) {
        if cmd != self.cmd {
            // New command - abandon the current transit and start afresh
            self.cmd = cmd;
            self.arrived = false;
            self.remaining = match cmd {
                NavCmd::None => 0,
                NavCmd::GotoDesk => self.desk_transit_ticks,
                NavCmd::GotoDropoff => self.dropoff_transit_ticks,
            };
        }

        if self.cmd != NavCmd::None && !self.arrived {
            if self.remaining > 0 {
                self.remaining -= 1;
            }

            if self.remaining == 0 {
                self.arrived = true;
                debug!("Nav: arrived ({})", self.cmd);
            }
        }
    }

    /// Arrival at the desk, held while `GotoDesk` remains commanded.
    pub fn desk_reached(&self) -> bool {
        self.cmd == NavCmd::GotoDesk && self.arrived
    }

    /// Arrival at the dropoff pad, held while `GotoDropoff` remains
    /// commanded.
    pub fn dropoff_reached(&self) -> bool {
        self.cmd == NavCmd::GotoDropoff && self.arrived
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_desk_transit() {
        let mut nav = Nav::new(3, 5);

        nav.tick(NavCmd::GotoDesk);
        nav.tick(NavCmd::GotoDesk);
        assert!(!nav.desk_reached());

        nav.tick(NavCmd::GotoDesk);
        assert!(nav.desk_reached());
        assert!(!nav.dropoff_reached());

        // Arrival level is held while the command is held
        nav.tick(NavCmd::GotoDesk);
        assert!(nav.desk_reached());
    }

    #[test]
    fn test_arrival_clears_on_command_change() {
        let mut nav = Nav::new(1, 2);

        nav.tick(NavCmd::GotoDesk);
        assert!(nav.desk_reached());

        // Commanded idle: arrival clears
        nav.tick(NavCmd::None);
        assert!(!nav.desk_reached());

        // Dropoff transit runs its own duration
        nav.tick(NavCmd::GotoDropoff);
        assert!(!nav.dropoff_reached());
        nav.tick(NavCmd::GotoDropoff);
        assert!(nav.dropoff_reached());
        assert!(!nav.desk_reached());
    }

    #[test]
    fn test_idle_never_arrives() {
        let mut nav = Nav::new(1, 1);

        for _ in 0..5 {
            nav.tick(NavCmd::None);
            assert!(!nav.desk_reached());
            assert!(!nav.dropoff_reached());
        }
    }
}
