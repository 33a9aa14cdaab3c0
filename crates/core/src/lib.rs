#![deny(unsafe_code)]
//! Core types and traits for the fieldlab vector-field visualization system.
//!
//! Provides the `VectorField` trait, the `AxisMapping`/`PanelMapping`
//! logical-to-screen transforms, the draggable `Region` square, the
//! `Integrator` (boundary circulation and flux with their Green's-theorem
//! predictions), `GridSampler`, and parameter helpers.

pub mod error;
pub mod field;
pub mod grid;
pub mod integrate;
pub mod mapping;
pub mod params;
pub mod region;

pub use error::LabError;
pub use field::VectorField;
pub use grid::{GridSample, GridSampler};
pub use integrate::{DivergenceClass, Integrator};
pub use mapping::{AxisMapping, PanelMapping};
pub use region::Region;
