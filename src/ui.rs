//! Terminal status lines and spinners.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(spinner_style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn success(message: &str) {
    println!("{}", style(message).green());
}

pub fn info(message: &str) {
    println!("{}", style(message).blue());
}

pub fn warn(message: &str) {
    eprintln!("{}", style(message).yellow());
}

pub fn failure(message: &str) {
    eprintln!("{}", style(message).red());
}
