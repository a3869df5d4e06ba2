//! Core data types for the layout engine.
//!
//! Address math is the foundation: every region record carries its start as
//! a hex string, and everything downstream works on decoded addresses.

pub mod address;
pub mod region;
