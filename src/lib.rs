//! Hysteresis threshold detector for embedded sensor processing.
//!
//! A [`Threshold`] turns a noisy numeric signal into a clean on/off state
//! using separate rise and fall trip points, so a reading hovering around
//! one cutoff does not make the output chatter.
//!
//! ```
//! use threshold::{Edge, Threshold};
//!
//! let mut nh3 = Threshold::with_band(5.0_f32, 10.0);
//! nh3.set_on_rising(|| println!("scrubber on"));
//!
//! assert!(!nh3.add_value(7.5)); // inside the band: hold
//! assert_eq!(nh3.update(12.0), Some(Edge::Rising));
//! assert!(nh3.add_value(6.0)); // still inside the band
//! assert!(!nh3.add_value(4.0));
//! ```
//!
//! The detector is synchronous and allocation-free per sample; hooks are
//! boxed once when they are set.  Mutation goes through `&mut self`, so
//! sharing one detector between execution contexts needs an outer lock.

#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod error;
pub mod events;
pub mod hysteresis;
pub mod ports;

pub use config::ThresholdConfig;
pub use error::{Error, Result};
pub use events::Edge;
pub use hysteresis::{Hook, Threshold};
