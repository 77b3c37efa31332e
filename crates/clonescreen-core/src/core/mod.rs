//! # Core Module
//!
//! Stateless foundation of the screening simulator: clone data models, the
//! population generator, the pure growth/production/scoring kinetics, and
//! the result export layer.
//!
//! ## Architecture
//!
//! - **Data models** ([`models`]) - clone identity, intrinsic parameters,
//!   write-once timepoint observations, and result rows
//! - **Population generation** ([`population`]) - randomized but bounded
//!   candidate creation from an injected random source
//! - **Biological kinetics** ([`kinetics`]) - growth curve, antibody
//!   production, and the composite selection score
//! - **Export** ([`io`]) - result sinks and the CSV implementation

pub mod io;
pub mod kinetics;
pub mod models;
pub mod population;
