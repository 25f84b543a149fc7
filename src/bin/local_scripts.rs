//! Lists the script names found in a saved `lib/` listing page.
//!
//! Reads `data/scripts.html` relative to the working directory and prints the
//! anchor-wrapped names as a bulleted list. A missing or unreadable file is
//! fatal; there is nothing sensible to print without it.

use anyhow::Context;
use krun_scrape::extract;

/// Where the saved listing page is expected, relative to the invocation
/// directory. Not configurable.
const LISTING_PATH: &str = "data/scripts.html";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let page = std::fs::read_to_string(LISTING_PATH)
        .with_context(|| format!("failed to read listing page at {LISTING_PATH}"))?;
    log::debug!(bytes = page.len(); "read listing page");

    let names = extract::script_names(&page);
    log::debug!(count = names.len(); "collected script names");

    println!("{}", extract::bullet_list(&names));
    Ok(())
}
