//=========================================================================
// Event Sink
//=========================================================================
//
// Fire-and-forget lifecycle events for analytics.
//
// Architecture:
//   LevelManager ──log()──> ChannelEventSink ──try_send──> Receiver
//                                                         (embedder thread)
//
// A full or disconnected channel never blocks or fails the caller; the
// record is dropped and counted. A closed channel is reported once.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{debug, warn};

//=== EventKind ===========================================================

/// Kind of lifecycle record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    LevelUnloaded,
    LevelLoaded,
    LevelStarted,
    LevelCompleted,
}

/// A single lifecycle record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEvent {
    pub kind: EventKind,
    pub subject: String,
}

//=== EventSink Trait =====================================================

/// Destination for lifecycle records.
pub trait EventSink {
    /// Records an event. Must not block and must not fail.
    fn log(&self, kind: EventKind, subject: &str);
}

//=== NullEventSink =======================================================

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn log(&self, _kind: EventKind, _subject: &str) {}
}

//=== ChannelEventSink ====================================================

/// Sends events over a bounded channel.
#[derive(Debug)]
pub struct ChannelEventSink {
    sender: Sender<LevelEvent>,
    dropped: Cell<u64>,
    closed: Cell<bool>,
}

impl ChannelEventSink {
    /// Creates a sink and the receiver that drains it.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn bounded(capacity: usize) -> (Self, Receiver<LevelEvent>) {
        assert!(capacity > 0, "Event capacity must be positive");
        let (sender, receiver) = bounded(capacity);
        (
            Self {
                sender,
                dropped: Cell::new(0),
                closed: Cell::new(false),
            },
            receiver,
        )
    }

    /// Number of records lost to a full or closed channel.
    pub fn dropped(&self) -> u64 {
        self.dropped.get()
    }

    /// Whether the receiver has gone away.
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

impl EventSink for ChannelEventSink {
    fn log(&self, kind: EventKind, subject: &str) {
        let event = LevelEvent { kind, subject: subject.to_string() };

        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                self.dropped.set(self.dropped.get() + 1);
                warn!("Event channel full, dropped {:?} for {}", event.kind, event.subject);
            }
            Err(TrySendError::Disconnected(event)) => {
                self.dropped.set(self.dropped.get() + 1);
                if self.closed.replace(true) {
                    debug!("Event channel closed, dropped {:?} for {}", event.kind, event.subject);
                } else {
                    warn!("Event channel closed, discarding events from now on");
                }
            }
        }
    }
}

//=== Tests ===============================================================
