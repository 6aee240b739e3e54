//! tonetext application: command line and the conversion entry point.

pub mod cli;
pub mod pipeline;
