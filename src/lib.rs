//! # westext - Standalone west extension commands
//!
//! westext packages this project's west extension commands as a single
//! native binary, so SITL builds run the same on machines without the
//! Python west extension scripts on the manifest path.
//!
//! ## Quick Start
//!
//! ```bash
//! # Build and install an app for software-in-the-loop simulation
//! westext sitl_build apps/rover
//! ```
//!
//! ## Module Organization
//!
//! - [`commands`] - CLI command handlers

/// CLI command handlers extracted from main.
pub mod commands;
