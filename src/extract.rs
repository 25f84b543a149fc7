use std::sync::LazyLock;

use regex::Regex;

/// The GitHub directory-listing page for the krun `lib/` folder.
pub const LIB_LISTING_URL: &str = "https://github.com/kevin197011/krun/tree/main/lib";

/// Fixed desktop-browser user agent, sent to get past basic bot blocking.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/103.0.0.0 Safari/537.36";

/// Matches anchor-wrapped script names in a saved listing page.
///
/// The alternation is kept exactly as the listing scripts have always used it:
/// the alternatives are `\S+\.sh`, `py`, `rb` and `pl`, so only `.sh` names may
/// carry a prefix while the other branches match the bare two letters between
/// `>` and `</a>`. Known quirk, deliberately not regrouped; downstream output
/// depends on it.
static SCRIPT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">(\S+\.sh|py|rb|pl)</a>").expect("hardcoded regex is valid"));

/// Matches listing entries of the form `"lib/<path>",` as they appear in the
/// payload GitHub embeds in its tree pages.
static LIB_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"lib/(.*?)","#).expect("hardcoded regex is valid"));

/// Collects every anchor-wrapped script name, in order of appearance.
pub fn script_names(page: &str) -> Vec<String> {
    SCRIPT_NAME
        .captures_iter(page)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Collects everything following a `lib/` prefix up to the closing `",`
/// delimiter, in order of appearance.
pub fn lib_entries(listing: &str) -> Vec<String> {
    LIB_ENTRY
        .captures_iter(listing)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Renders names as a `  - ` bulleted list, one per line.
///
/// An empty slice renders as a single bare bullet, matching the historical
/// join-based output.
#[must_use]
pub fn bullet_list(names: &[String]) -> String {
    format!("  - {}", names.join("\n  - "))
}
