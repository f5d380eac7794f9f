pub mod persistence;
pub mod session;
