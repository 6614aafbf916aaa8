pub mod display;
pub mod writable;

pub use display::{DisplayPreferences, DISPLAY_PREFERENCES};
pub use writable::{Subscription, Writable};
