//! The send operation and the surface contracts it works against.

pub mod appender;
pub mod surface;

pub use appender::{is_blank_char, plan_send, try_send_message, SendOutcome, SendPlan};
pub use surface::{DisplayEntry, DisplaySurface, TextEntry};
