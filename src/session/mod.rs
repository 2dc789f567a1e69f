//! Session state controller
//!
//! The whole palette workflow is a plain value ([`SessionState`]) and a pure
//! transition function ([`reduce`]). Requests to the backends leave the
//! reducer as [`Effect`]s and come back as result intents, so every rule can
//! be exercised without a terminal or a network.

pub mod intent;
pub mod ordering;
pub mod reducer;
pub mod state;

pub use intent::{Effect, Intent};
pub use reducer::reduce;
pub use state::{Direction, SessionState, Tab};
