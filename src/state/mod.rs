//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `dashboard`) so individual
//! components can depend on small focused models. The structs are plain
//! data wrapped in `RwSignal` at the context layer, which keeps every
//! transition testable on native targets.

pub mod dashboard;
pub mod session;
