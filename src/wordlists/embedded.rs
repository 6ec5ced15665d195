//! Compiled-in word lists
//!
//! The build script turns the `data/` text files into const arrays; this
//! module pulls the generated code in.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
