pub mod action;
pub mod outcome;
pub mod target;

pub use action::Action;
pub use outcome::LaunchResult;
pub use target::{LaunchTarget, KIOSK_FLAG};
