//! Embassy tasks

mod control;
mod status;

pub use control::control_task;
pub use status::status_led_task;
