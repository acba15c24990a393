//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `files`, `proposal`) so
//! individual components can depend on small focused models. Every state
//! transition is a plain method on the owning struct; the push client and
//! the controller only route into them, which keeps the transitions
//! natively testable.

pub mod chat;
pub mod files;
pub mod proposal;
pub mod session;
