//=========================================================================
// Lifecycle Events
//=========================================================================
//
// Classified level lifecycle records (unloaded, loaded, started,
// completed) emitted by the level manager.
//
//=========================================================================

mod event_sink;

pub use event_sink::{ChannelEventSink, EventKind, EventSink, LevelEvent, NullEventSink};
