pub(crate) mod config;
pub(crate) mod state;

pub(crate) use state::{App, Event, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
