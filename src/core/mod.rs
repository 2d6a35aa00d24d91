//! Core page-interaction logic: typing sequencer, counter animator, line
//! revealer, scroll-animation dispatcher, easter-egg matcher, and form
//! validation. Everything in this module is DOM-free and natively testable;
//! the browser wiring lives in `crate::ui`.

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod counter;
pub mod dispatch;
pub mod konami;
pub mod reveal;
pub mod typing;
pub mod validation;
pub mod waitlist;

#[cfg(test)]
mod tests;

pub use counter::{CounterAnimation, StatTarget, ease_out_quad};
pub use dispatch::{Animation, AnimationDispatcher, SectionKind};
pub use konami::KonamiTracker;
pub use reveal::{DemoLine, DemoLineKind, LineRevealer};
pub use typing::{TypingFrame, TypingSequencer};
pub use validation::{ValidationError, validate_email};
pub use waitlist::{FormPhase, SignupRecord};
