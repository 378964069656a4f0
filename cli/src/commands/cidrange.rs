use anyhow::Context;
use iptools_common::config::Config;
use iptools_common::ops;
use tracing::debug;

use crate::terminal::print;
use crate::terminal::render::Block;

pub fn cidrange(cidr: &str, cfg: &Config) -> anyhow::Result<()> {
    debug!(cidr, "computing block boundaries");

    let boundaries = ops::cidr_boundaries(cidr)
        .with_context(|| format!("failed to parse CIDR {cidr:?}"))?;

    debug!(
        first = %boundaries.first,
        last = %boundaries.last,
        magnitude = %boundaries.magnitude,
        "block resolved"
    );
    print::report(&Block(&boundaries), cfg);
    Ok(())
}
