//! Use Cases Layer - Application Workflows
//!
//! Orchestrates the domain registry with the store port.
//!
//! Use cases:
//! - `Gradebook`: load at startup, save on exit, degrade on failure
//! - `Menu`: interactive console shell over a gradebook

pub mod gradebook;
pub mod menu;

pub use gradebook::Gradebook;
pub use menu::Menu;
