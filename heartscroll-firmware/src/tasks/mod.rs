//! Embassy async tasks
//!
//! Two tasks: the animation tick (writer) and the matrix scan (reader).
//! They communicate only through the statics in `channels`.

pub mod animate;
pub mod scan;

pub use animate::animate_task;
pub use scan::{scan_task, GpioMatrix};
