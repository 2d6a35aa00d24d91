//! Leptos components for the landing page and the browser-side drivers that
//! bind the `core` state machines to the DOM.

pub mod demo;
pub mod easter_egg;
pub mod features;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod nav;
#[cfg(not(feature = "ssr"))]
pub mod observer;
pub mod page;
pub mod stats;
pub mod steps;
pub mod styles;
pub mod testimonials;
pub mod waitlist;

pub use icon::{Icon, icons};
pub use page::LandingPage;
