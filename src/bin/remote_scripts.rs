//! Lists the scripts in the krun repository's `lib/` folder on GitHub.
//!
//! One GET against the tree page with a browser user agent, one regex pass
//! over the returned text, print the matches. Network failures and non-2xx
//! statuses are fatal; no retries, no timeout beyond the client defaults.

use anyhow::Context;
use krun_scrape::extract;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::debug!(url = extract::LIB_LISTING_URL; "fetching listing");
    let body = reqwest::Client::new()
        .get(extract::LIB_LISTING_URL)
        .header("User-Agent", extract::USER_AGENT)
        .send()
        .await
        .with_context(|| format!("GET {} failed", extract::LIB_LISTING_URL))?
        .error_for_status()
        .context("listing page returned an error status")?
        .text()
        .await
        .context("failed to read listing body as text")?;
    log::debug!(bytes = body.len(); "fetched listing page");

    let entries = extract::lib_entries(&body);
    println!("{entries:?}");
    Ok(())
}
