use serde::{Deserialize, Serialize};

/// Region name meaning "no region filter".
pub const ALL_REGIONS: &str = "all";

/// (name, region id, offset, limit) for every region, in national dex order.
const REGION_TABLE: [(&str, u32, usize, usize); 9] = [
    ("kanto", 1, 0, 151),
    ("johto", 2, 151, 100),
    ("hoenn", 3, 251, 135),
    ("sinnoh", 4, 386, 108),
    ("unova", 5, 494, 155),
    ("kalos", 6, 649, 72),
    ("alola", 7, 721, 88),
    ("galar", 8, 809, 89),
    ("paldea", 9, 898, 122),
];

/// One catalog entry.
///
/// `id` is the 1-based position in the listing, not whatever number the
/// API embeds in `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub url: String,
}

/// A contiguous slice of the national dex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub url: String,
    pub offset: usize,
    pub limit: usize,
}

impl Region {
    /// Exclusive end index of this region in the full catalog.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.limit)
    }
}

/// The fixed region list installed by every successful load.
pub fn default_regions() -> Vec<Region> {
    REGION_TABLE
        .iter()
        .map(|&(name, region_id, offset, limit)| Region {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/region/{}", region_id),
            offset,
            limit,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_are_contiguous() {
        let regions = default_regions();
        assert_eq!(regions.len(), 9);
        assert_eq!(regions[0].offset, 0);
        for pair in regions.windows(2) {
            assert_eq!(pair[0].end(), pair[1].offset, "{} -> {}", pair[0].name, pair[1].name);
        }
        assert_eq!(regions.last().map(Region::end), Some(1020));
    }

    #[test]
    fn test_region_names_are_unique() {
        let regions = default_regions();
        let mut names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), regions.len());
        assert!(!names.contains(&ALL_REGIONS));
    }

    #[test]
    fn test_region_url() {
        let regions = default_regions();
        assert_eq!(regions[3].name, "sinnoh");
        assert_eq!(regions[3].url, "https://pokeapi.co/api/v2/region/4");
    }
}
