//! Log-based edge sink adapter.
//!
//! Implements [`EdgeSink`] by writing each transition to the `log` facade,
//! which goes to whatever logger the application installed (UART, RTT,
//! stderr...).

use log::info;

use crate::error::Result;
use crate::events::Edge;
use crate::ports::EdgeSink;

/// Adapter that logs every [`Edge`] under a channel label.
pub struct LogEdgeSink {
    label: &'static str,
    count: u32,
}

impl LogEdgeSink {
    pub fn new(label: &'static str) -> Self {
        Self { label, count: 0 }
    }

    /// Number of edges logged so far.
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl EdgeSink for LogEdgeSink {
    fn emit(&mut self, edge: Edge) -> Result<()> {
        self.count = self.count.saturating_add(1);
        info!(
            "EDGE | {} | {} -> state={} (#{})",
            self.label,
            edge,
            edge.level(),
            self.count
        );
        Ok(())
    }
}
