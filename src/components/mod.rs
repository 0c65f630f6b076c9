pub mod app;
pub mod time_display;

pub use app::{App, AppProps};
pub use time_display::TimeDisplay;
