//! Magnitude suffix table

/// A power-of-ten scale with a written suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Magnitude {
    /// 1e3
    Thousand,
    /// 1e6
    Million,
    /// 1e9
    Billion,
    /// 1e12
    Trillion,
}

impl Magnitude {
    /// All scales, largest first
    pub const DESCENDING: [Magnitude; 4] = [
        Magnitude::Trillion,
        Magnitude::Billion,
        Magnitude::Million,
        Magnitude::Thousand,
    ];

    /// Exact multiplier for this scale
    pub const fn multiplier(self) -> f64 {
        match self {
            Magnitude::Thousand => 1e3,
            Magnitude::Million => 1e6,
            Magnitude::Billion => 1e9,
            Magnitude::Trillion => 1e12,
        }
    }

    /// Suffix used when formatting
    pub const fn symbol(self) -> &'static str {
        match self {
            Magnitude::Thousand => "K",
            Magnitude::Million => "M",
            Magnitude::Billion => "B",
            Magnitude::Trillion => "T",
        }
    }
}

/// Accepted suffix spellings. Keys are lowercase and distinct; every alias
/// of a scale goes through the same `Magnitude`, so equal inputs spelled
/// differently produce bit-identical values.
pub static SUFFIX_TABLE: [(&str, Magnitude); 9] = [
    ("k", Magnitude::Thousand),
    ("thousand", Magnitude::Thousand),
    ("m", Magnitude::Million),
    ("million", Magnitude::Million),
    ("b", Magnitude::Billion),
    ("bn", Magnitude::Billion),
    ("billion", Magnitude::Billion),
    ("t", Magnitude::Trillion),
    ("trillion", Magnitude::Trillion),
];

/// Look up a suffix, case-insensitively. The whole string must be a key.
pub fn lookup_suffix(suffix: &str) -> Option<Magnitude> {
    SUFFIX_TABLE
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(suffix))
        .map(|(_, magnitude)| *magnitude)
}
