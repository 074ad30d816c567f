//! Page sections and the artwork detail overlay.

pub mod about;
pub mod artwork_card;
pub mod artwork_modal;
pub mod contact;
pub mod exhibitions;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod media;
pub mod nav;
pub mod press_carousel;
pub mod room_simulator;
