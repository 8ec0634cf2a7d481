#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Which end of the start fragment an edge leaves from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum EdgeDir {
    Sense,
    Antisense,
}

impl EdgeDir {
    /// Parse a direction from a single-element bytestring, where S is
    /// Sense, A is Antisense
    #[inline]
    pub fn from_bytes<T: AsRef<[u8]>>(bs: T) -> Option<Self> {
        match bs.as_ref() {
            b"S" => Some(EdgeDir::Sense),
            b"A" => Some(EdgeDir::Antisense),
            _ => None,
        }
    }

    #[inline]
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::Sense => b'S',
            Self::Antisense => b'A',
        }
    }

    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Sense => Self::Antisense,
            Self::Antisense => Self::Sense,
        }
    }
}

/// Default direction is sense
impl Default for EdgeDir {
    #[inline]
    fn default() -> EdgeDir {
        EdgeDir::Sense
    }
}

impl std::ops::Not for EdgeDir {
    type Output = EdgeDir;

    #[inline]
    fn not(self) -> EdgeDir {
        self.flip()
    }
}

impl std::str::FromStr for EdgeDir {
    type Err = &'static str;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeDir::from_bytes(s.as_bytes())
            .ok_or("Could not parse edge direction (was not S or A)")
    }
}

impl std::fmt::Display for EdgeDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}

/// Whether the end fragment is placed in the same orientation as the
/// start fragment, or reverse-complemented relative to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum EdgeComp {
    Same,
    Reverse,
}

impl EdgeComp {
    /// Parse a complement flag from a single-element bytestring,
    /// where + is Same, - is Reverse
    #[inline]
    pub fn from_bytes_plus_minus<T: AsRef<[u8]>>(bs: T) -> Option<Self> {
        match bs.as_ref() {
            b"+" => Some(EdgeComp::Same),
            b"-" => Some(EdgeComp::Reverse),
            _ => None,
        }
    }

    #[inline]
    pub fn plus_minus_as_byte(&self) -> u8 {
        match self {
            Self::Same => b'+',
            Self::Reverse => b'-',
        }
    }

    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Same => Self::Reverse,
            Self::Reverse => Self::Same,
        }
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        !bool::from(*self)
    }
}

/// Default complement is same
impl Default for EdgeComp {
    #[inline]
    fn default() -> EdgeComp {
        EdgeComp::Same
    }
}

/// Same is true, reverse is false
impl From<EdgeComp> for bool {
    #[inline]
    fn from(c: EdgeComp) -> bool {
        match c {
            EdgeComp::Same => true,
            EdgeComp::Reverse => false,
        }
    }
}

impl std::str::FromStr for EdgeComp {
    type Err = &'static str;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeComp::from_bytes_plus_minus(s.as_bytes())
            .ok_or("Could not parse edge complement (was not + or -)")
    }
}

/// Display maps `Same` to "+" and `Reverse` to "-".
///
/// # Examples
///
/// ```
/// use scaffold_graph::edge::EdgeComp as C;
///
/// assert_eq!(&format!("{}", C::Same), "+");
/// assert_eq!(&format!("{}", C::Reverse), "-");
/// ```
impl std::fmt::Display for EdgeComp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plus_minus_as_byte() as char)
    }
}
