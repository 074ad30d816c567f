//! Outbound HTTP.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no backend of its own. The only network call it makes is
//! the contact form submission to a third-party transactional email relay.

pub mod contact;
