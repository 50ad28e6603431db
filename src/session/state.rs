use crate::domain::{HistoryRecord, Selection};

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum ControllerState {
    #[default]
    Idle,
    Playing,
    Paused,
    Stopping,
    /// A session just played through every repeat. Settles to `Idle` on the next poll.
    Ended,
}

/// What a controller call changed, for the presentation to report
#[derive(Debug, PartialEq)]
pub enum Transition {
    Unchanged,
    Started {
        selection: Selection,
        repeat_count: u32,
    },
    Paused,
    Resumed,
    StopRequested,
    Repeated {
        /// Zero-based index of the repeat now playing
        index: u32,
        repeat_count: u32,
    },
    Stopped(HistoryRecord),
    Completed {
        record: HistoryRecord,
        shutdown: bool,
    },
}

/// Read-only view published to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: ControllerState,
    pub selection: Option<Selection>,
    /// One-based, for display
    pub repeat: Option<(u32, u32)>,
    pub elapsed: String,
}
