//! Terminal output for the CLI front end

pub mod display;

pub use display::{guess_row, print_board, print_outcome};
