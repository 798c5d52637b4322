pub mod engine;
pub mod input;
pub mod mode;
pub mod phase;
pub mod reading;
pub mod reference;
pub mod session;
