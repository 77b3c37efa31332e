//! # Workflows Module
//!
//! High-level entry points tying the engine and core together. The screening
//! workflow drives one full campaign end to end and returns the structured
//! outcome for a reporting layer to render.

pub mod screen;
