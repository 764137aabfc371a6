//! Directory materialization for non-recursive listings.

use crate::adapter::Metadata;
use crate::path;
use std::collections::BTreeSet;

/// Add an implicit directory entry for every ancestor implied by `listing`
/// that has no row of its own in `listing`.
///
/// Only ancestors within `scope` are synthesized, so a listing never
/// contains entries its own path filter would have excluded. The result is
/// sorted by path.
pub fn emulate_directories(mut listing: Vec<Metadata>, scope: &str) -> Vec<Metadata> {
    let listed: BTreeSet<String> = listing
        .iter()
        .map(|entry| entry.path.clone())
        .collect();

    let mut implied: BTreeSet<String> = BTreeSet::new();
    for entry in &listing {
        for parent in path::ancestors(&entry.path) {
            if !path::is_within(parent, scope) {
                break;
            }
            if !implied.insert(parent.to_string()) {
                // already walked from here up
                break;
            }
        }
    }

    listing.extend(
        implied
            .difference(&listed)
            .map(|dir| Metadata::implicit_dir(dir.as_str())),
    );
    listing.sort_by(|a, b| a.path.cmp(&b.path));
    listing
}
