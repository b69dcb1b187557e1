//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements | Connects to                       |
//! |------------|------------|-----------------------------------|
//! | `log_sink` | EdgeSink   | `log` facade (serial console)     |
//! | `pin`      | EdgeSink   | `embedded-hal` digital output pin |

pub mod log_sink;
pub mod pin;
