//! Notification sink seam.
//!
//! The evaluator returns findings; how they are shown is the caller's
//! concern. A sink receives each finding with its severity and renders it
//! however the surrounding surface likes.

use crate::health::Finding;

/// Receiver for findings produced by a health-check pass.
pub trait NotificationSink {
    fn notify(&mut self, finding: &Finding);
}

/// Sink that prints findings to stdout with a severity icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&mut self, finding: &Finding) {
        println!("{} {}", finding.severity.icon(), finding.message);
    }
}

/// Sink that collects findings in memory; used by tests and embedding UIs.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub findings: Vec<Finding>,
}

impl NotificationSink for MemorySink {
    fn notify(&mut self, finding: &Finding) {
        self.findings.push(finding.clone());
    }
}

/// Push a batch of findings through a sink, in order.
pub fn dispatch(sink: &mut dyn NotificationSink, findings: &[Finding]) {
    for finding in findings {
        sink.notify(finding);
    }
}
