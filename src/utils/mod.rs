//! Shared helpers.

pub mod html;
pub mod plural;
pub mod slug;
