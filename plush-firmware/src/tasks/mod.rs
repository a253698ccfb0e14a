//! Embassy async tasks
//!
//! The whole control loop runs in one task; nothing else touches the frame.

pub mod tick;

pub use tick::tick_task;
