use anyhow::Context;
use iptools_common::config::Config;
use iptools_common::ops;
use tracing::debug;

use crate::terminal::print;
use crate::terminal::render::{Step, StepKind};

pub fn next(ip: &str, cfg: &Config) -> anyhow::Result<()> {
    step(ip, StepKind::Next, cfg)
}

pub fn prev(ip: &str, cfg: &Config) -> anyhow::Result<()> {
    step(ip, StepKind::Prev, cfg)
}

fn step(ip: &str, kind: StepKind, cfg: &Config) -> anyhow::Result<()> {
    debug!(ip, ?kind, "stepping");

    let stepped = match kind {
        StepKind::Next => ops::next(ip),
        StepKind::Prev => ops::prev(ip),
    };
    let addr: String = stepped.with_context(|| format!("cannot compute {} IP of {ip:?}", kind.label()))?;

    print::report(&Step { kind, addr: &addr }, cfg);
    Ok(())
}
