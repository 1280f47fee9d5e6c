//! Platform-agnostic logic: navigation state, content model and helpers.

pub mod contact;
pub mod content;
pub mod motion;
pub mod nav;
pub mod period;
pub mod skills;
pub mod timing;
