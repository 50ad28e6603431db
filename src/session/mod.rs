mod controller;
mod session;
mod state;
mod tracker;

pub use controller::SessionController;
pub use session::{DEFAULT_REPEAT_COUNT, Session, parse_repeat_count};
pub use state::{ControllerState, SessionSnapshot, Transition};
pub use tracker::{ElapsedTracker, TICK_INTERVAL, format_hms};
