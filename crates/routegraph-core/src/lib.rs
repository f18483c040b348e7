//! Routegraph Core Library
//!
//! Core domain logic for the routegraph route network: a mutable directed
//! graph of routes, congestion-aware least-cost paths with an explainable
//! trace, and undo/redo over every topology edit.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
