//! Pure filtering and paging functions behind the store.

use tracing::warn;

use crate::catalog::{Pokemon, Region, ALL_REGIONS};

/// Narrows `all` to the selected region's `[offset, offset + limit)` range.
///
/// `"all"` and unknown region names leave the list unsliced. Ranges that run
/// past the end of the catalog are clamped.
pub fn region_slice<'a>(all: &'a [Pokemon], regions: &[Region], region: &str) -> &'a [Pokemon] {
    if region == ALL_REGIONS {
        return all;
    }

    match regions.iter().find(|r| r.name == region) {
        Some(info) => {
            let start = info.offset.min(all.len());
            let end = info.end().min(all.len());
            &all[start..end]
        }
        None => {
            warn!(region, "unknown region, no region filter applied");
            all
        }
    }
}

/// Search predicate.
///
/// The name branch matches the trimmed, lowercased query as a substring of
/// the lowercased name. The id branch compares the stringified id with the
/// raw query, so `" 25 "` never matches an id.
pub fn matches_search(pokemon: &Pokemon, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    pokemon.name.to_lowercase().contains(&needle) || pokemon.id.to_string() == query
}

/// Region slice first, then search within it. Order is preserved.
pub fn apply_filters(
    all: &[Pokemon],
    regions: &[Region],
    region: &str,
    query: &str,
) -> Vec<Pokemon> {
    let scoped = region_slice(all, regions, region);

    if query.trim().is_empty() {
        return scoped.to_vec();
    }

    scoped
        .iter()
        .filter(|p| matches_search(p, query))
        .cloned()
        .collect()
}

/// The `page`-th (1-based) window of `per_page` items. Page 0 and pages past
/// the end are empty.
pub fn page_slice(items: &[Pokemon], page: usize, per_page: usize) -> &[Pokemon] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(per_page))
    else {
        return &[];
    };

    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}
