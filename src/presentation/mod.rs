// Presentation layer - Command line
pub mod cli;
