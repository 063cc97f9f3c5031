//! Road classification tags and the query-time allow/deny filter.
//!
//! Every fine-graph edge carries exactly one [`WayClass`].  Queries pass a
//! [`TagFilter`] to exclude restricted way types (pedestrian-only paths,
//! service roads, …) from both meta-graph aggregation and fine solves.

/// Classification of a road edge, condensed from upstream map tags.
///
/// The set is deliberately flat and small so a filter fits in one `u16`
/// bitmask; applications with richer taxonomies should collapse them onto
/// these variants during network loading.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum WayClass {
    Motorway = 0,
    Trunk = 1,
    Primary = 2,
    Secondary = 3,
    Tertiary = 4,
    #[default]
    Residential = 5,
    Service = 6,
    Track = 7,
    Cycleway = 8,
    /// Pedestrian-only (footway, path, steps).
    Footway = 9,
}

impl WayClass {
    pub const COUNT: usize = 10;

    /// All variants in discriminant order.
    pub const ALL: [WayClass; Self::COUNT] = [
        WayClass::Motorway,
        WayClass::Trunk,
        WayClass::Primary,
        WayClass::Secondary,
        WayClass::Tertiary,
        WayClass::Residential,
        WayClass::Service,
        WayClass::Track,
        WayClass::Cycleway,
        WayClass::Footway,
    ];

    #[inline]
    fn bit(self) -> u16 {
        1 << self as u8
    }

    /// `true` for classes normally traversable by a car.
    #[inline]
    pub fn is_drivable(self) -> bool {
        !matches!(self, WayClass::Cycleway | WayClass::Footway)
    }

    /// Human-readable label, useful for diagnostics and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            WayClass::Motorway    => "motorway",
            WayClass::Trunk       => "trunk",
            WayClass::Primary     => "primary",
            WayClass::Secondary   => "secondary",
            WayClass::Tertiary    => "tertiary",
            WayClass::Residential => "residential",
            WayClass::Service     => "service",
            WayClass::Track       => "track",
            WayClass::Cycleway    => "cycleway",
            WayClass::Footway     => "footway",
        }
    }
}

impl std::fmt::Display for WayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allow/deny set over [`WayClass`], passed per query.
///
/// Internally a bitmask, so copying and testing are free; build one with
/// [`TagFilter::all`], [`TagFilter::only`], or the chainable
/// [`deny`](TagFilter::deny)/[`allow`](TagFilter::allow).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagFilter {
    allowed: u16,
}

impl TagFilter {
    /// Permit every way class (the default).
    #[inline]
    pub fn all() -> Self {
        Self { allowed: (1 << WayClass::COUNT as u16) - 1 }
    }

    /// Permit only the listed classes.
    pub fn only(classes: &[WayClass]) -> Self {
        let mut allowed = 0;
        for c in classes {
            allowed |= c.bit();
        }
        Self { allowed }
    }

    /// Permit drivable classes only (excludes cycleway/footway).
    pub fn drivable() -> Self {
        Self::all().deny(WayClass::Cycleway).deny(WayClass::Footway)
    }

    /// Remove one class from the allowed set.
    #[inline]
    pub fn deny(mut self, class: WayClass) -> Self {
        self.allowed &= !class.bit();
        self
    }

    /// Add one class to the allowed set.
    #[inline]
    pub fn allow(mut self, class: WayClass) -> Self {
        self.allowed |= class.bit();
        self
    }

    /// `true` if edges of `class` may be traversed under this filter.
    #[inline]
    pub fn allows(self, class: WayClass) -> bool {
        self.allowed & class.bit() != 0
    }

    /// `true` if no class at all is permitted.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.allowed == 0
    }
}

impl Default for TagFilter {
    fn default() -> Self {
        Self::all()
    }
}
