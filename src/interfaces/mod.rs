//! Adapters between the engine and the outside world: text parsing, display
//! formatting and CSV batch I/O.

pub mod csv;
pub mod display;
pub mod text;
