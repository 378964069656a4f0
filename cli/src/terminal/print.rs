use colored::*;
use iptools_common::config::{Config, OutputMode};

use crate::terminal::render::Render;

pub fn print(msg: &str) {
    println!("{msg}");
}

/// Writes a command result to stdout in the configured output mode.
pub fn report<R: Render>(result: &R, cfg: &Config) {
    match cfg.output {
        OutputMode::Short => print(&result.short()),
        OutputMode::Descriptive => match result.color().filter(|_| cfg.color) {
            Some(color) => {
                for line in result.descriptive().lines() {
                    print(&line.color(color).to_string());
                }
            }
            None => print(&result.descriptive()),
        },
    }
}
