//! Shared reactive page state.
//!
//! DESIGN
//! ======
//! Each struct is plain data held in an `RwSignal` and provided through
//! Leptos context by `App`. Transitions are methods on the struct so they
//! can be tested without a browser.

pub mod contact;
pub mod detail;
pub mod gallery;
pub mod nav;
