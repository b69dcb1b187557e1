//! Integration tests for the sample → detector → hooks pipeline.
//!
//! These drive a detector from a scripted ADC the way a firmware control
//! loop would, and check state, hook order and edge reporting.

use std::cell::RefCell;
use std::rc::Rc;

use threshold::adapters::log_sink::LogEdgeSink;
use threshold::{Edge, Threshold, ThresholdConfig};

use crate::mock_hw::ScriptedAdc;

type Calls = Rc<RefCell<Vec<&'static str>>>;

fn wire_hooks<T>(t: &mut Threshold<T>) -> Calls
where
    T: PartialOrd + Copy + std::fmt::Debug,
{
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let c = Rc::clone(&calls);
    t.set_on_change(move || c.borrow_mut().push("OnChange"));
    let c = Rc::clone(&calls);
    t.set_on_rising(move || c.borrow_mut().push("OnRising"));
    let c = Rc::clone(&calls);
    t.set_on_falling(move || c.borrow_mut().push("OnFalling"));
    calls
}

// ── Band scenario: 10 / 20, starting low ─────────────────────

#[test]
fn band_walkthrough_matches_expected_states_and_hooks() {
    let mut t = Threshold::with_band_and_state(10, 20, false);
    let calls = wire_hooks(&mut t);
    let mut adc = ScriptedAdc::new(&[15, 21, 15, 9]);

    assert!(!t.poll(&mut adc), "15 is inside the band");
    assert!(calls.borrow().is_empty());

    assert!(t.poll(&mut adc), "21 > 20 rises");
    assert_eq!(*calls.borrow(), ["OnChange", "OnRising"]);

    assert!(t.poll(&mut adc), "15 holds the high state");
    assert_eq!(calls.borrow().len(), 2);

    assert!(!t.poll(&mut adc), "9 < 10 falls");
    assert_eq!(
        *calls.borrow(),
        ["OnChange", "OnRising", "OnChange", "OnFalling"]
    );
    assert_eq!(adc.remaining(), 0);
}

// ── Single threshold: 50 ─────────────────────────────────────

#[test]
fn single_threshold_ignores_the_exact_cutoff() {
    let mut t = Threshold::new(50_u16);
    assert_eq!(t.rise_threshold(), 50);
    assert_eq!(t.fall_threshold(), 50);

    assert!(!t.add_value(50));
    assert!(t.add_value(51));
}

// ── Chatter suppression ──────────────────────────────────────

#[test]
fn noisy_signal_around_one_cutoff_switches_once_per_excursion() {
    // Ripple around 100 with one real excursion up and one down.
    let noisy = [98, 101, 99, 102, 99, 101, 110, 101, 99, 102, 98, 101, 90, 101, 99];

    let mut plain = Threshold::new(100);
    let mut banded = Threshold::with_band(97, 103);
    let plain_calls = wire_hooks(&mut plain);
    let banded_calls = wire_hooks(&mut banded);

    for v in noisy {
        plain.add_value(v);
        banded.add_value(v);
    }

    let rises = |c: &Calls| c.borrow().iter().filter(|s| **s == "OnRising").count();
    assert_eq!(rises(&banded_calls), 1, "band must absorb the ripple");
    assert!(
        rises(&plain_calls) > rises(&banded_calls),
        "a single cutoff chatters on the same signal"
    );
}

// ── Floating-point boundary ──────────────────────────────────

#[test]
fn float_boundary_needs_strictly_greater() {
    let mut t = Threshold::with_band(0.5_f64, 1.5);
    assert_eq!(t.update(1.5), None);
    assert_eq!(t.update(1.5 + f64::EPSILON * 2.0), Some(Edge::Rising));
    assert_eq!(t.update(0.5), None);
    assert_eq!(t.update(0.499), Some(Edge::Falling));
}

// ── Config-driven setup ──────────────────────────────────────

#[test]
fn detector_from_stored_config() {
    let json = r#"{"low":900,"high":1200,"initial_state":true}"#;
    let cfg: ThresholdConfig<u16> = serde_json::from_str(json).unwrap();
    let mut t = Threshold::from_config(&cfg).unwrap();

    assert!(t.state());
    assert!(t.add_value(1000));
    assert!(!t.add_value(899));

    let saved = serde_json::to_string(&t.config()).unwrap();
    assert_eq!(saved, r#"{"low":900,"high":1200,"initial_state":false}"#);
}

#[test]
fn runtime_retune_applies_to_next_sample() {
    let mut t = Threshold::with_band(10, 20);
    let calls = wire_hooks(&mut t);
    t.add_value(15);

    t.set_thresholds(14, 5);
    assert!(t.add_value(15), "15 is above the new rise threshold");
    assert_eq!(*calls.borrow(), ["OnChange", "OnRising"]);
}

// ── Edge sinks ───────────────────────────────────────────────

#[test]
fn log_sink_sees_every_edge() {
    let mut t = Threshold::with_band(10, 20);
    let mut adc = ScriptedAdc::new(&[25, 5, 25, 5, 15]);
    let mut sink = LogEdgeSink::new("tank");

    let edges: Vec<Option<Edge>> = (0..5)
        .map(|_| t.poll_into(&mut adc, &mut sink).unwrap())
        .collect();

    assert_eq!(
        edges,
        [
            Some(Edge::Rising),
            Some(Edge::Falling),
            Some(Edge::Rising),
            Some(Edge::Falling),
            None
        ]
    );
    assert_eq!(sink.count(), 4);
}
