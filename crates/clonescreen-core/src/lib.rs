//! # clonescreen Core Library
//!
//! A pedagogical simulation of automated high-throughput CHO cell-line
//! screening for antibody production: synthetic clone populations, a simple
//! growth/production model over a fixed three-timepoint schedule, and
//! composite-score ranking of the candidates.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict three-layer separation so the biological model
//! stays pure and the orchestration stays testable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`CellClone`,
//!   `ResultRow`), the pure kinetics functions (growth, production, scoring),
//!   the population generator, and the export layer.
//!
//! - **[`engine`]: The Logic Core.** The stateful campaign state machine that
//!   owns the clone collection and the append-only event log, drives the
//!   Day 0/3/7 schedule, and performs selection. All randomness and time come
//!   from injected sources, and all output leaves as structured events.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry point: run one
//!   complete screening campaign and get back the result table, selection and
//!   summary.

pub mod core;
pub mod engine;
pub mod workflows;
