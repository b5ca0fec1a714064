// SPDX-License-Identifier: MPL-2.0
//! Page regions and the per-region resolver.
//!
//! A page is split into three independently laid-out regions. Each one owns
//! its own toast, menu, dialog and backdrop surfaces. [`RegionMap`] is the
//! single place where a [`Region`] is turned into the value it owns.

use std::fmt;
use std::str::FromStr;

/// One of the three layout zones of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Region {
    /// The `<main>` part of the page.
    Main,
    /// The `<aside>` part of the page.
    Aside,
    /// The whole page. Used when no region is given.
    #[default]
    Full,
}

impl Region {
    /// All regions, in resolver order.
    pub const ALL: [Region; 3] = [Region::Main, Region::Aside, Region::Full];

    /// Position of this region inside a [`RegionMap`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Region::Main => 0,
            Region::Aside => 1,
            Region::Full => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Region::Main => "main",
            Region::Aside => "aside",
            Region::Full => "full",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRegion(pub String);

impl fmt::Display for UnknownRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown region: {}", self.0)
    }
}

impl std::error::Error for UnknownRegion {}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(Region::Main),
            "aside" => Ok(Region::Aside),
            "full" | "default" => Ok(Region::Full),
            _ => Err(UnknownRegion(s.to_string())),
        }
    }
}

/// One value per [`Region`].
///
/// Lookups are total: every region always has a value, so resolving a
/// surface can never fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionMap<T>([T; 3]);

impl<T> RegionMap<T> {
    /// Builds a map by calling `f` once for each region.
    pub fn from_fn(f: impl FnMut(Region) -> T) -> Self {
        Self(Region::ALL.map(f))
    }

    #[must_use]
    pub fn get(&self, region: Region) -> &T {
        &self.0[region.index()]
    }

    pub fn get_mut(&mut self, region: Region) -> &mut T {
        &mut self.0[region.index()]
    }

    /// Iterates over `(region, value)` pairs in resolver order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &T)> {
        Region::ALL.into_iter().zip(self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_is_full() {
        assert_eq!(Region::default(), Region::Full);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("main".parse::<Region>(), Ok(Region::Main));
        assert_eq!("ASIDE".parse::<Region>(), Ok(Region::Aside));
        assert_eq!(" Full ".parse::<Region>(), Ok(Region::Full));
        assert_eq!("default".parse::<Region>(), Ok(Region::Full));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "footer".parse::<Region>().unwrap_err();
        assert_eq!(err, UnknownRegion("footer".to_string()));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>(), Ok(region));
        }
    }

    #[test]
    fn indices_are_distinct() {
        let indices: Vec<usize> = Region::ALL.iter().map(|r| r.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn region_map_resolves_each_region_independently() {
        let mut map = RegionMap::from_fn(|r| r.as_str().len());
        assert_eq!(*map.get(Region::Main), 4);
        assert_eq!(*map.get(Region::Aside), 5);

        *map.get_mut(Region::Full) = 42;
        assert_eq!(*map.get(Region::Full), 42);
        assert_eq!(*map.get(Region::Main), 4);
    }

    #[test]
    fn region_map_iter_pairs_regions_with_values() {
        let map: RegionMap<u8> = RegionMap::default();
        let regions: Vec<Region> = map.iter().map(|(r, _)| r).collect();
        assert_eq!(regions, Region::ALL.to_vec());
    }
}
