//! Utility Module
//!
//! - [`time`]: frame timing for the animation controller's internal clock

pub mod time;

pub use time::Timer;
