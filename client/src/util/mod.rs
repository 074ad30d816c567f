//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Anything touching `web_sys` is compiled under the `csr` feature and
//! has an inert native counterpart so the crate still builds and tests natively.

pub mod dom;
pub mod frame_loop;
pub mod image;
pub mod loader;
pub mod pointer;
pub mod style;
