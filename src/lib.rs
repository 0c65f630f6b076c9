//! Elapsed-time display for a web page.
//!
//! A [`Timer`] reads a [`Clock`], is driven by a [`Scheduler`] and pushes
//! `M:SS` strings to a [`DisplaySink`]. The browser implementations live next
//! to deterministic ones used in tests.

pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod manual;
pub mod page;
pub mod scheduler;
pub mod sink;
pub mod timer;
pub mod util;

pub use clock::{Clock, DateClock, ManualClock};
pub use config::{DisplayMode, TimerConfig};
pub use error::TimerError;
pub use manual::ManualScheduler;
pub use scheduler::{Scheduler, TaskHandle, WindowScheduler};
pub use sink::{CallbackSink, DisplaySink, ElementSink};
pub use timer::Timer;
pub use util::format_time;
