//! Form domain layer
//!
//! Text inputs and the sign-in form built on them.

mod field;
mod sign_in;

pub use field::FormField;
pub use sign_in::{SignInController, SignInFocus, SignInOutcome, SignInPhase};
