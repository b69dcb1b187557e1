//! Output-pin follower.
//!
//! Mirrors the detector state onto a digital output (relay, LED, alarm
//! buzzer) through the `embedded-hal` 1.0 [`OutputPin`] trait, so it works
//! with any HAL.  Polarity is configurable for active-low wiring.

use embedded_hal::digital::{Error as _, OutputPin};
use log::warn;

use crate::error::{OutputError, Result};
use crate::events::Edge;
use crate::ports::EdgeSink;

pub struct PinFollower<P> {
    pin: P,
    /// Electrical level that represents state `true`.
    active_high: bool,
}

impl<P: OutputPin> PinFollower<P> {
    /// State `true` drives the pin high.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_high: true,
        }
    }

    /// State `true` drives the pin low.
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_high: false,
        }
    }

    /// Apply the result of [`Threshold::update`](crate::Threshold::update).
    /// `None` leaves the pin untouched.
    pub fn apply(&mut self, edge: Option<Edge>) -> core::result::Result<(), OutputError> {
        match edge {
            Some(edge) => self.sync(edge.level()),
            None => Ok(()),
        }
    }

    /// Force the pin to match `state`, e.g. once at start-up.
    pub fn sync(&mut self, state: bool) -> core::result::Result<(), OutputError> {
        let res = if state == self.active_high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|e| {
            warn!("output pin write failed: {:?}", e.kind());
            OutputError::PinWriteFailed
        })
    }

    /// Give the pin back to the caller.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> EdgeSink for PinFollower<P> {
    fn emit(&mut self, edge: Edge) -> Result<()> {
        self.sync(edge.level())?;
        Ok(())
    }
}
