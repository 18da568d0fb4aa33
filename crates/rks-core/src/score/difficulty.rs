use std::str::FromStr;

use strum::{EnumString, FromRepr, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, EnumString, IntoStaticStr)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(serialize = "EZ")]
    Ez = 0,
    #[strum(serialize = "HD")]
    Hd = 1,
    #[strum(serialize = "IN")]
    In = 2,
    #[strum(serialize = "AT")]
    At = 3,
}

impl Difficulty {
    /// All tiers in export order.
    pub const ALL: [Difficulty; 4] = [Self::Ez, Self::Hd, Self::In, Self::At];

    /// Tier for a slot in a save record array (0 = EZ .. 3 = AT)
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Parse a cell value, ignoring surrounding whitespace.
    pub fn parse_cell(value: &str) -> Option<Self> {
        Self::from_str(value.trim()).ok()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
