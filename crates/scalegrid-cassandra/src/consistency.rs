//! Cassandra consistency levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Consistency level requested for the count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Consistency {
    Any,
    #[default]
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    LocalOne,
}

/// Returned when a name matches no consistency level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown consistency level {0:?}")]
pub struct UnknownConsistency(pub String);

impl Consistency {
    pub const ALL: [Consistency; 9] = [
        Consistency::Any,
        Consistency::One,
        Consistency::Two,
        Consistency::Three,
        Consistency::Quorum,
        Consistency::All,
        Consistency::LocalQuorum,
        Consistency::EachQuorum,
        Consistency::LocalOne,
    ];

    /// The name accepted in trigger metadata.
    pub fn name(self) -> &'static str {
        match self {
            Consistency::Any => "Any",
            Consistency::One => "One",
            Consistency::Two => "Two",
            Consistency::Three => "Three",
            Consistency::Quorum => "Quorum",
            Consistency::All => "All",
            Consistency::LocalQuorum => "LocalQuorum",
            Consistency::EachQuorum => "EachQuorum",
            Consistency::LocalOne => "LocalOne",
        }
    }

    /// Native protocol wire code.
    pub fn code(self) -> u16 {
        match self {
            Consistency::Any => 0x0000,
            Consistency::One => 0x0001,
            Consistency::Two => 0x0002,
            Consistency::Three => 0x0003,
            Consistency::Quorum => 0x0004,
            Consistency::All => 0x0005,
            Consistency::LocalQuorum => 0x0006,
            Consistency::EachQuorum => 0x0007,
            Consistency::LocalOne => 0x000A,
        }
    }
}

impl FromStr for Consistency {
    type Err = UnknownConsistency;

    /// Exact, case-sensitive match on [`Consistency::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Consistency::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| UnknownConsistency(s.to_string()))
    }
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
