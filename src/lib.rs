//! askterm: interactive terminal assistant for a conversational language model
//!
//! A run selects an operation, gathers input (typed text, a file, a PDF, a web
//! page or the working-tree git diff), renders it into a prompt template,
//! sends it to the model backend once, and displays or saves the response.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod model;
pub mod orchestrate;
pub mod prompt;
pub mod render;
pub mod session;
pub mod templates;
pub mod ui;
pub mod utils;

pub use domain::{AcquiredInput, InputMethod, Operation, OutputMethod, POPULAR_LANGUAGES};
pub use error::{AppError, Result};
