use std::sync::mpsc;

use ripper_core::OutputEvent;

/// Receives every event of a run, in order, from the worker thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: OutputEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<OutputEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<OutputEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: OutputEvent) {
        // A closed receiver means the interface is gone; the run finishes anyway.
        let _ = self.tx.send(event);
    }
}
