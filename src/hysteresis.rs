//! Hysteresis threshold detector.
//!
//! Turns a continuously varying sample into a boolean state using two trip
//! points instead of one:
//!
//! ```text
//!            state = true
//!   ─────────────────────────────  rise   (sample > rise  : false -> true)
//!        hysteresis band: hold
//!   ─────────────────────────────  fall   (sample < fall  : true -> false)
//!            state = false
//! ```
//!
//! Both comparisons are strict, so a sample sitting exactly on a threshold
//! never flips the state.  With `fall == rise` the detector degenerates to a
//! plain comparator that still ignores samples equal to the cutoff.
//!
//! ## Hooks
//!
//! Three optional callbacks fire synchronously inside
//! [`Threshold::add_value`], before it returns:
//!
//! | transition     | order                        |
//! |----------------|------------------------------|
//! | false -> true  | `on_change`, then `on_rising`  |
//! | true -> false  | `on_change`, then `on_falling` |
//!
//! Setting a hook replaces the previous one.

use core::fmt;

use log::{debug, info, trace};

use crate::config::ThresholdConfig;
use crate::error::{ConfigError, Result};
use crate::events::Edge;
use crate::ports::{EdgeSink, SamplePort};

/// A zero-argument notification callback owned by the detector.
pub type Hook = Box<dyn FnMut()>;

/// Two-threshold state detector over any partially ordered sample type.
pub struct Threshold<T> {
    /// Below this the state drops to `false`.  Always `<= rise`.
    fall: T,
    /// Above this the state goes to `true`.
    rise: T,
    state: bool,
    on_change: Option<Hook>,
    on_rising: Option<Hook>,
    on_falling: Option<Hook>,
}

impl<T> Threshold<T>
where
    T: PartialOrd + Copy + fmt::Debug,
{
    /// Single cutoff used for both directions, starting `false`.
    pub fn new(threshold: T) -> Self {
        Self::with_band_and_state(threshold, threshold, false)
    }

    /// Single cutoff with an explicit initial state.
    pub fn with_state(threshold: T, state: bool) -> Self {
        Self::with_band_and_state(threshold, threshold, state)
    }

    /// Two-bound band, starting `false`.  Bound order does not matter.
    pub fn with_band(low: T, high: T) -> Self {
        Self::with_band_and_state(low, high, false)
    }

    /// Full constructor; every other one delegates here.
    pub fn with_band_and_state(low: T, high: T, state: bool) -> Self {
        let (fall, rise) = normalise(low, high);
        Self {
            fall,
            rise,
            state,
            on_change: None,
            on_rising: None,
            on_falling: None,
        }
    }

    /// Build a detector from a validated configuration.
    pub fn from_config(config: &ThresholdConfig<T>) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_band_and_state(
            config.low,
            config.high,
            config.initial_state,
        ))
    }

    /// Snapshot of the current thresholds and state.
    pub fn config(&self) -> ThresholdConfig<T> {
        ThresholdConfig::band(self.fall, self.rise).with_initial_state(self.state)
    }

    // ── Accessors ─────────────────────────────────────────────────

    /// Current state.  No side effects.
    pub fn state(&self) -> bool {
        self.state
    }

    pub fn fall_threshold(&self) -> T {
        self.fall
    }

    pub fn rise_threshold(&self) -> T {
        self.rise
    }

    // ── Evaluation ────────────────────────────────────────────────

    /// Feed one sample and return the (possibly updated) state.
    pub fn add_value(&mut self, value: T) -> bool {
        self.update(value);
        self.state
    }

    /// Feed one sample and report the transition it caused, if any.
    ///
    /// The rising check runs first and its effects (state change and hooks)
    /// complete before the falling check looks at the state.  Since
    /// `fall <= rise`, a sample that just rose is never also below `fall`,
    /// so at most one edge is produced per call.
    pub fn update(&mut self, value: T) -> Option<Edge> {
        let mut edge = None;

        if !self.state && value > self.rise {
            self.state = true;
            debug!("threshold rising: {:?} > {:?}", value, self.rise);
            fire(&mut self.on_change);
            fire(&mut self.on_rising);
            edge = Some(Edge::Rising);
        }

        if self.state && value < self.fall {
            self.state = false;
            debug!("threshold falling: {:?} < {:?}", value, self.fall);
            fire(&mut self.on_change);
            fire(&mut self.on_falling);
            edge = Some(Edge::Falling);
        }

        edge
    }

    /// Read one sample from `port` and evaluate it.
    pub fn poll<P>(&mut self, port: &mut P) -> bool
    where
        P: SamplePort<T> + ?Sized,
    {
        let value = port.read();
        self.add_value(value)
    }

    /// Read one sample from `port`, evaluate it and forward any edge to
    /// `sink`.  Hooks still fire first, inside the evaluation.
    pub fn poll_into<P, S>(&mut self, port: &mut P, sink: &mut S) -> Result<Option<Edge>>
    where
        P: SamplePort<T> + ?Sized,
        S: EdgeSink + ?Sized,
    {
        let edge = self.update(port.read());
        if let Some(edge) = edge {
            sink.emit(edge)?;
        }
        Ok(edge)
    }

    // ── Reconfiguration ───────────────────────────────────────────

    /// Replace both thresholds.  The state is kept and no hook fires; the
    /// next sample is judged against the new band.
    pub fn set_thresholds(&mut self, low: T, high: T) {
        let (fall, rise) = normalise(low, high);
        info!(
            "threshold band {:?}..{:?} -> {:?}..{:?}",
            self.fall, self.rise, fall, rise
        );
        self.fall = fall;
        self.rise = rise;
    }

    /// Force the state without firing hooks, e.g. to re-arm after a reset.
    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    // ── Hooks ─────────────────────────────────────────────────────

    /// Called on every transition, before the direction-specific hook.
    pub fn set_on_change<F>(&mut self, hook: F)
    where
        F: FnMut() + 'static,
    {
        trace!("on_change hook set");
        self.on_change = Some(Box::new(hook));
    }

    /// Called after `on_change` on a false -> true transition.
    pub fn set_on_rising<F>(&mut self, hook: F)
    where
        F: FnMut() + 'static,
    {
        trace!("on_rising hook set");
        self.on_rising = Some(Box::new(hook));
    }

    /// Called after `on_change` on a true -> false transition.
    pub fn set_on_falling<F>(&mut self, hook: F)
    where
        F: FnMut() + 'static,
    {
        trace!("on_falling hook set");
        self.on_falling = Some(Box::new(hook));
    }

    pub fn clear_on_change(&mut self) {
        trace!("on_change hook cleared");
        self.on_change = None;
    }

    pub fn clear_on_rising(&mut self) {
        trace!("on_rising hook cleared");
        self.on_rising = None;
    }

    pub fn clear_on_falling(&mut self) {
        trace!("on_falling hook cleared");
        self.on_falling = None;
    }
}

impl<T: fmt::Debug> fmt::Debug for Threshold<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Threshold")
            .field("fall", &self.fall)
            .field("rise", &self.rise)
            .field("state", &self.state)
            .field("on_change", &self.on_change.is_some())
            .field("on_rising", &self.on_rising.is_some())
            .field("on_falling", &self.on_falling.is_some())
            .finish()
    }
}

/// Order two bounds as `(fall, rise)`.
///
/// Mirrors `min`/`max` for comparable values.  If the bounds are unordered
/// both collapse to `b`, which keeps `fall <= rise` from being violated by
/// a swap that never happened.
fn normalise<T: PartialOrd + Copy>(a: T, b: T) -> (T, T) {
    let fall = if a <= b { a } else { b };
    let rise = if a > b { a } else { b };
    (fall, rise)
}

fn fire(hook: &mut Option<Hook>) {
    if let Some(hook) = hook.as_mut() {
        hook();
    }
}
