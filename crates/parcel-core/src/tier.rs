//! Power-of-four parcel size classes.

use std::fmt;

/// Size class of a parcel.
///
/// A tier-`k` parcel covers `4^k` cells arranged as a `2^k × 2^k`
/// square. The six named sizes map one-to-one onto tiers 0 through 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tier {
    /// 1 cell.
    XSmall = 0,
    /// 4 cells.
    Small = 1,
    /// 16 cells.
    Medium = 2,
    /// 64 cells.
    Large = 3,
    /// 256 cells.
    XLarge = 4,
    /// 1024 cells.
    XXLarge = 5,
}

impl Tier {
    /// The coarsest tier.
    pub const MAX: Tier = Tier::XXLarge;

    /// Number of tiers.
    pub const COUNT: usize = 6;

    /// Every tier, finest first.
    pub const ALL: [Tier; Tier::COUNT] = [
        Tier::XSmall,
        Tier::Small,
        Tier::Medium,
        Tier::Large,
        Tier::XLarge,
        Tier::XXLarge,
    ];

    /// Look up a tier by level, returning `None` above [`Tier::MAX`].
    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.get(level as usize).copied()
    }

    /// Numeric level `k`.
    pub fn level(self) -> u32 {
        self as u32
    }

    /// Number of cells covered: `4^k`.
    pub fn area(self) -> u64 {
        1u64 << (2 * self.level())
    }

    /// Edge length in cells: `2^k`.
    pub fn side(self) -> u32 {
        1u32 << self.level()
    }

    /// Next coarser tier, or `None` at [`Tier::MAX`].
    pub fn coarser(self) -> Option<Self> {
        Self::from_level(self as u8 + 1)
    }

    /// Human-readable size name.
    pub fn name(self) -> &'static str {
        match self {
            Self::XSmall => "xsmall",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
            Self::XXLarge => "xxlarge",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (tier {})", self.name(), self.level())
    }
}

impl TryFrom<u8> for Tier {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or(level)
    }
}
