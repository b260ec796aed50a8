//! # Mission Executable Parameters
//!
//! This module provides parameters for the mission executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct MsnExecParams {
    /// Colour detection activation duration in cycles
    pub colour_detect_cycles: u64,

    /// Infrared colour report duration in cycles
    pub ir_comm_cycles: u64,

    /// Pickup gripper cycle duration in cycles
    pub pickup_cycles: u64,

    /// Dropoff release cycle duration in cycles
    pub dropoff_cycles: u64,

    /// Navigation transit duration to the desk in cycles
    pub desk_transit_cycles: u64,

    /// Navigation transit duration to the dropoff pad in cycles
    pub dropoff_transit_cycles: u64,

    /// Scenario inputs standing in for environment-sourced signals
    pub scenario: ScenarioParams,
}

/// Scenario inputs for a simulated mission.
///
/// These stand in for the signals the real rover sources from its
/// environment: the pad colour sensor feed, the package-presence switch and
/// the ground reset line.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioParams {
    /// 3-bit colour code presented by the starting pad
    pub pad_colour: u8,

    /// Cycle at which the pad colour becomes visible
    pub pad_colour_cycle: u64,

    /// Cycles after pickup is enabled before the package-presence switch
    /// trips
    pub pickup_detect_delay_cycles: u64,

    /// Optional cycle at which the reset line is asserted for one cycle,
    /// used to exercise the universal reset edge
    pub reset_at_cycle: Option<u64>,
}
