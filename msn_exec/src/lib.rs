//! # Mission executive library.
//!
//! This library allows other crates in the workspace to access items defined inside the executive
//! crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Global data store shared by the executive's cyclic processing
pub mod data_store;

/// Mission controller module - sequences the phases of the delivery mission
pub mod msn_ctrl;

/// Executive-level parameters
pub mod params;

/// Collaborator subsystem simulations - stand-ins for the five external units
pub mod subsys;
