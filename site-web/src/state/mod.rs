//! View state
//!
//! Plain state machines behind the interactive parts of the site. Components own
//! them inside an `RwSignal` and drive them from event handlers.

pub mod deletion;
pub mod faq;
pub mod navigation;

pub use deletion::{DeletionRequestDraft, DraftError, DraftPhase};
pub use faq::FaqViewState;
pub use navigation::NavigationViewState;
