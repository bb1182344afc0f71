//! # Connect Four
//!
//! A Connect Four engine with a line-oriented console front end and a
//! terminal UI built with Ratatui. Games are played by two humans or with
//! columns drawn at random.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, validation, win detection, turn state machine
//! - [`random`]: Random column picker
//! - [`console`]: Text rendering and line-by-line play over any reader/writer
//! - [`ui`]: Terminal UI: game view and board widget
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod random;
pub mod ui;
