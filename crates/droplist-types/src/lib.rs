//! Foundation types and traits for droplist.
//!
//! This crate contains the platform-agnostic types shared by the widget and
//! its hosts: colors, geometry, input events, the rendering and text-metrics
//! traits, configuration, and error types.

pub mod backend;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
