use anyhow::Context;
use iptools_common::config::Config;
use iptools_common::ops;
use tracing::debug;

use crate::terminal::print;
use crate::terminal::render::Membership;

pub fn inrange(ip: &str, ranges: &str, cfg: &Config) -> anyhow::Result<()> {
    debug!(ip, ranges, "checking membership");

    let contains: bool = ops::is_member(ip, ranges)
        .with_context(|| format!("cannot check {ip} against {ranges:?}"))?;

    debug!(contains, "membership resolved");
    print::report(&Membership { ip, ranges, contains }, cfg);
    Ok(())
}
