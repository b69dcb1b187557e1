//! Port traits: the boundary between the detector and the platform layer.
//!
//! ```text
//!   ADC / sensor ──▶ SamplePort ──▶ Threshold ──▶ EdgeSink (pin, log, ...)
//! ```
//!
//! The detector does not care where samples come from or what a transition
//! means downstream.  Platform code implements [`SamplePort`] for its ADC
//! channel (or passes a closure) and [`EdgeSink`] for whatever reacts to
//! edges; see [`crate::adapters`] for the stock sinks.

use crate::error::Result;
use crate::events::Edge;

/// Read-side port: the detector calls this to obtain one sample.
pub trait SamplePort<T> {
    /// Take one reading.  Must not block.
    fn read(&mut self) -> T;
}

/// Any `FnMut() -> T` is a sample source, e.g. `|| adc.read_raw()`.
impl<T, F> SamplePort<T> for F
where
    F: FnMut() -> T,
{
    fn read(&mut self) -> T {
        self()
    }
}

/// Write-side port: receives every edge produced by
/// [`Threshold::poll_into`](crate::Threshold::poll_into).
pub trait EdgeSink {
    fn emit(&mut self, edge: Edge) -> Result<()>;
}
