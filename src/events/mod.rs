//! Event notification support
//!
//! A single listener registry type serves every event kind; the caller picks
//! the callback per notification.

pub mod listener_list;

pub use listener_list::ListenerList;
