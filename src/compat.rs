//! Host-version capabilities.
//!
//! The set of expression kinds a host exposes depends on its release:
//!
//! | Expression kind | Minimum host version |
//! |-----------------|----------------------|
//! | Ceil, Coalesce, ConcatPair, StrIndex | any |
//! | Collate, Random, SHA-2 family | 3.2+ |
//!
//! Capabilities are computed once at startup from the injected host version
//! and passed into registration, so no global version state is consulted.

use std::collections::HashSet;
use std::fmt;

use crate::expr::FunctionKind;

/// A host framework release, compared as (major, minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// First host release shipping the collation, random and SHA-2 expression
/// classes.
pub const FUNCTIONS_MIN_VERSION: Version = Version::new(3, 2);

/// What the running host is capable of.
///
/// Carried as independent booleans so a host with a nonstandard mix can be
/// described without code changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compat {
    pub has_collate: bool,
    pub has_random: bool,
    pub has_sha2: bool,
}

impl Compat {
    /// Capabilities of a stock host at `version`.
    pub fn for_host_version(version: Version) -> Self {
        let modern = version >= FUNCTIONS_MIN_VERSION;
        Self {
            has_collate: modern,
            has_random: modern,
            has_sha2: modern,
        }
    }
}

/// The set of expression kinds the running host exposes.
///
/// Injected into registration by the embedding backend so the registry never
/// reaches into host internals itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeCatalogue {
    kinds: HashSet<FunctionKind>,
}

impl NodeCatalogue {
    pub fn new(kinds: impl IntoIterator<Item = FunctionKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Catalogue of a stock host at `version`.
    pub fn for_version(version: Version) -> Self {
        let mut kinds = HashSet::from([
            FunctionKind::Ceil,
            FunctionKind::Coalesce,
            FunctionKind::ConcatPair,
            FunctionKind::StrIndex,
        ]);
        if version >= FUNCTIONS_MIN_VERSION {
            kinds.insert(FunctionKind::Collate);
            kinds.insert(FunctionKind::Random);
            kinds.extend(FunctionKind::SHA2);
        }
        Self { kinds }
    }

    pub fn contains(&self, kind: FunctionKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
