//! # Engine Module
//!
//! Stateful campaign orchestration: the strictly sequential screening state
//! machine and everything it owns.
//!
//! ## Architecture
//!
//! - **Campaign driver** ([`campaign`]) - the
//!   `Created -> Seeded -> Fed -> Harvested -> Selected -> Closed` state
//!   machine over the clone population
//! - **Configuration** ([`config`]) - campaign settings and their builder
//! - **Event log** ([`events`]) - append-only structured records, ordered by
//!   day then clone creation order
//! - **Reporting** ([`progress`]) - the structured event sink abstraction
//! - **Time** ([`clock`]) - injected time provider
//! - **Results** ([`state`]) - selection reports and closing summaries
//! - **Error Handling** ([`error`]) - campaign error taxonomy

pub mod campaign;
pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod phase;
pub mod progress;
pub mod state;
