//! # Data Store

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use crate::{
    msn_ctrl,
    params::MsnExecParams,
    subsys::{ColourDetect, Dropoff, IrComm, Nav, Pickup},
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u128,

    /// True if this cycle falls on a 1Hz boundary
    pub is_1_hz_cycle: bool,

    // MsnCtrl
    pub msn_ctrl: msn_ctrl::MsnCtrl,
    pub msn_ctrl_input: msn_ctrl::InputData,
    pub msn_ctrl_output: msn_ctrl::OutputData,
    pub msn_ctrl_status_rpt: msn_ctrl::StatusReport,

    // Collaborator subsystems (simulated)
    pub colour_detect: ColourDetect,
    pub nav: Nav,
    pub ir_comm: IrComm,
    pub pickup: Pickup,
    pub dropoff: Dropoff,

    /// Cycle on which the pickup enable line was first raised for the
    /// current activation, used to time the package-presence switch
    pub pickup_en_start_cycle: Option<u128>,

    // Monitoring counters
    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl DataStore {
    /// Build the data store, constructing the collaborator simulations from
    /// the exec parameters.
    pub fn new(params: &MsnExecParams) -> Self {
        Self {
            num_cycles: 0,
            is_1_hz_cycle: false,
            msn_ctrl: msn_ctrl::MsnCtrl::default(),
            msn_ctrl_input: msn_ctrl::InputData::default(),
            msn_ctrl_output: msn_ctrl::OutputData::default(),
            msn_ctrl_status_rpt: msn_ctrl::StatusReport::default(),
            colour_detect: ColourDetect::new(params.colour_detect_cycles),
            nav: Nav::new(params.desk_transit_cycles, params.dropoff_transit_cycles),
            ir_comm: IrComm::new(params.ir_comm_cycles),
            pickup: Pickup::new(params.pickup_cycles),
            dropoff: Dropoff::new(params.dropoff_cycles),
            pickup_en_start_cycle: None,
            num_consec_cycle_overruns: 0,
        }
    }

    /// Perform actions required at the start of a cycle.
    ///
    /// Clears those items that need clearing at the start of a cycle, and
    /// sets the 1Hz cycle flag.
    pub fn cycle_start(&mut self, cycle_frequency_hz: f64) {
        self.is_1_hz_cycle = self.num_cycles % (cycle_frequency_hz as u128) == 0;

        self.msn_ctrl_input = msn_ctrl::InputData::default();
        self.msn_ctrl_output = msn_ctrl::OutputData::default();
        self.msn_ctrl_status_rpt = msn_ctrl::StatusReport::default();
    }
}
