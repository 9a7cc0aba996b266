//! CLI Command handlers
//!
//! This module contains the implementation of the west extension command
//! handlers kept out of main.rs for better organization.

pub mod sitl_build;
