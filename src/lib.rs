//! Extraction helpers for the krun script collection.
//!
//! The krun repository keeps its runnable scripts under `lib/`, and two small
//! scripts in this crate list them:
//! * `local-scripts` reads a saved directory-listing page from `data/scripts.html`
//!   and prints the anchor-wrapped script names as a bulleted list.
//! * `remote-scripts` fetches the GitHub directory listing for `lib/` and prints
//!   every path found after the `lib/` prefix.
//!
//! Both are one-shot: one read or one GET, one regex pass, print, exit. Any
//! failure is fatal to the invocation; there are no retries and no partial
//! results. The shared patterns and constants live in [`extract`] so the
//! binaries and their tests agree on a single definition.
//!
//! The sibling `krun-webhook` crate in this workspace is unrelated code that
//! merely shares the repository: a receiver that echoes posted bodies to stdout.

pub mod extract;
