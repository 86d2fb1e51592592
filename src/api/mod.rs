//! Backend API Bindings
//!
//! Fetch-based REST calls, organized by backend domain. All requests go to
//! the same origin the app is served from; errors come back as strings and
//! are logged by callers, never surfaced to the user.

mod cart;
mod images;
mod menu;
mod order;

pub use cart::*;
pub use images::*;
pub use menu::*;
pub use order::*;
