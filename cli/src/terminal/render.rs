//! Text for every command result, in both output modes.

use colored::Color;
use iptools_common::ops::CidrBoundaries;

use crate::terminal::colors;

pub trait Render {
    /// Full sentence form.
    fn descriptive(&self) -> String;

    /// Bare value form for scripts.
    fn short(&self) -> String;

    /// `None` leaves the terminal's own foreground color alone.
    fn color(&self) -> Option<Color> {
        None
    }
}

pub struct Membership<'a> {
    pub ip: &'a str,
    pub ranges: &'a str,
    pub contains: bool,
}

impl Render for Membership<'_> {
    fn descriptive(&self) -> String {
        if self.contains {
            format!("{} is in {}", self.ip, self.ranges)
        } else {
            format!("{} is NOT in {}", self.ip, self.ranges)
        }
    }

    fn short(&self) -> String {
        self.contains.to_string()
    }

    fn color(&self) -> Option<Color> {
        Some(if self.contains { colors::PRIMARY } else { colors::NEGATIVE })
    }
}

pub struct Block<'a>(pub &'a CidrBoundaries);

impl Render for Block<'_> {
    fn descriptive(&self) -> String {
        let b = self.0;
        format!(
            "{} ({} addresses):\nfrom: {}\nto: {}",
            b.cidr, b.magnitude, b.first, b.last
        )
    }

    fn short(&self) -> String {
        format!("{}-{}", self.0.first, self.0.last)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Next,
    Prev,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Next => "Next",
            StepKind::Prev => "Prev",
        }
    }
}

pub struct Step<'a> {
    pub kind: StepKind,
    pub addr: &'a str,
}

impl Render for Step<'_> {
    fn descriptive(&self) -> String {
        format!("{} IP: {}", self.kind.label(), self.addr)
    }

    fn short(&self) -> String {
        self.addr.to_string()
    }
}

pub struct Batch<'a> {
    pub addrs: &'a [String],
}

impl Render for Batch<'_> {
    fn descriptive(&self) -> String {
        format!("{} IPs: {}", self.addrs.len(), self.addrs.join(","))
    }

    fn short(&self) -> String {
        self.addrs.join(",")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
