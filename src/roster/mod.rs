//! Interactive user roster management.
//!
//! The store owns the authoritative user list and is the only place it is
//! mutated; the session tracks the modal/draft state machine plus the
//! search and filter inputs; the app/view pair is the rendering
//! collaborator driving both from key events. Everything is in-memory and
//! lost on exit.

mod app;
mod models;
mod session;
mod store;
mod view;

pub use app::ManagerApp;
pub use store::UserStore;
