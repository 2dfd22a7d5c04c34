//! Byte counts written with magnitude suffixes, such as `512M`, `1MiB`, or `2G`.
//!
//! Single-letter and `B`-suffixed units are decimal (`k` = 10^3, `MB` = 10^6), while
//! `i`-suffixed units are binary (`Ki` = 2^10, `GiB` = 2^30). This matches what parted
//! accepts on its command line.

use std::{fmt, str::FromStr};

pub const KIB: u64 = 1024;
pub const MIB: u64 = KIB * 1024;
pub const GIB: u64 = MIB * 1024;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ByteSizeError {
    #[error(display = "could not interpret {:?} as a number", _0)]
    Number(Box<str>),
    #[error(display = "could not interpret {:?} as a byte unit", _0)]
    Unit(Box<str>),
    #[error(display = "{:?} does not fit in an unsigned 64-bit byte count", _0)]
    Overflow(Box<str>),
}

/// A count of bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Shrinkwrap)]
pub struct ByteSize(pub u64);

impl ByteSize {
    /// Rounds down to the nearest multiple of `alignment`.
    pub fn align_down(self, alignment: u64) -> Self {
        if alignment == 0 {
            return self;
        }

        ByteSize(*self - *self % alignment)
    }

    pub fn saturating_add(self, other: ByteSize) -> Self {
        ByteSize((*self).saturating_add(*other))
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}

impl FromStr for ByteSize {
    type Err = ByteSizeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let token: String = input.chars().filter(|c| *c != ' ').collect();

        let split = token
            .char_indices()
            .rev()
            .find(|(_, c)| !c.is_alphabetic())
            .map_or(0, |(pos, c)| pos + c.len_utf8());

        let (number, unit) = token.split_at(split);

        let number: f64 = if number.is_empty() && !token.chars().any(|c| c.is_ascii_digit()) {
            1.0
        } else {
            number.parse().map_err(|_| ByteSizeError::Number(number.into()))?
        };

        let multiplier = unit_multiplier(unit).ok_or_else(|| ByteSizeError::Unit(unit.into()))?;

        let bytes = number * multiplier as f64;
        if !bytes.is_finite() || bytes < 0.0 || bytes >= u64::MAX as f64 {
            return Err(ByteSizeError::Overflow(input.into()));
        }

        Ok(ByteSize(bytes as u64))
    }
}

fn unit_multiplier(unit: &str) -> Option<u64> {
    let multiplier = match unit.to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" => 1_000,
        "m" | "mb" => 1_000_000,
        "g" | "gb" => 1_000_000_000,
        "t" | "tb" => 1_000_000_000_000,
        "p" | "pb" => 1_000_000_000_000_000,
        "ki" | "kib" => KIB,
        "mi" | "mib" => MIB,
        "gi" | "gib" => GIB,
        "ti" | "tib" => GIB * KIB,
        "pi" | "pib" => GIB * MIB,
        _ => return None,
    };

    Some(multiplier)
}
