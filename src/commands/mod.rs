//! Command implementations for the CLI front end

pub mod board;
pub mod play;
pub mod share;

pub use board::run_board;
pub use play::run_play;
pub use share::run_share;
