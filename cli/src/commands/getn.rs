use anyhow::Context;
use iptools_common::config::Config;
use iptools_common::ops;
use tracing::{debug, info};

use crate::terminal::print;
use crate::terminal::render::Batch;

pub fn getn(cidr: &str, count: i64, offset: u64, tail: bool, cfg: &Config) -> anyhow::Result<()> {
    debug!(cidr, count, offset, tail, "enumerating block");

    let addrs: Vec<String> = ops::enumerate(cidr, count, offset, tail)
        .with_context(|| format!("cannot list addresses of {cidr:?}"))?;

    if (addrs.len() as u64) < count.unsigned_abs() {
        info!("{cidr} ran out of host addresses after {} of {count}", addrs.len());
    }

    print::report(&Batch { addrs: &addrs }, cfg);
    Ok(())
}
