pub mod control;
pub mod header;
pub mod session;
pub mod wiring;
