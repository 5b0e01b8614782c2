//! A pipe-dodging side-scroller for the terminal.
//!
//! The library holds the whole game; the binary only wires it to a terminal,
//! a sound device and the score file.

pub mod audio;
pub mod character;
pub mod constants;
pub mod entities;
pub mod error;
pub mod input;
pub mod lobby;
pub mod logging;
pub mod render;
pub mod scores;
pub mod secret;
pub mod session;
pub mod settings;
pub mod timer;
