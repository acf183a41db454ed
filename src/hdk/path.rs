//! Module implementing parsing for BIP-0032 HD paths used for key derivation.

use serde::Deserialize;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

/// A value indicating a path component is hardened.
pub const HARDENED: u32 = 0x8000_0000;

/// The default maximum number of components in a path.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// The default allowed BIP-0043 purposes: BIP-0044, BIP-0049 and BIP-0084.
pub const DEFAULT_PURPOSES: [u32; 3] = [44, 49, 84];

/// Errors parsing or validating a derivation path.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum PathError {
    #[error("invalid BIP-0032 path '{0}'")]
    InvalidFormat(String),
    #[error("path depth {depth} exceeds the maximum of {max}")]
    TooDeep { depth: usize, max: usize },
    #[error("path purpose {0} is not allowed")]
    InvalidPurpose(u32),
}

/// A parsed hierarchical derivation path.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Path {
    components: Vec<Component>,
}

impl Path {
    /// Creates a path from its components.
    pub fn new(components: impl IntoIterator<Item = Component>) -> Self {
        Self {
            components: components.into_iter().collect(),
        }
    }

    /// Creates the default Ethereum HD path for the specified account index.
    ///
    /// The index is a normal path component, so it must be below
    /// [`HARDENED`].
    pub fn for_index(index: u32) -> Result<Self, PathError> {
        if index & HARDENED != 0 {
            return Err(PathError::InvalidFormat(format!("m/44'/60'/0'/0/{index}")));
        }

        Ok(Self::new([
            Component::Hardened(44),
            Component::Hardened(60),
            Component::Hardened(0),
            Component::Normal(0),
            Component::Normal(index),
        ]))
    }

    /// Returns an iterator over the path components.
    pub fn components(&self) -> impl Iterator<Item = Component> + '_ {
        self.components.iter().copied()
    }

    /// Returns the number of components after the master node.
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    /// Returns the numerical value of the first component, if any.
    pub fn purpose(&self) -> Option<u32> {
        self.components.first().map(|component| component.value())
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("m")?;
        for component in self.components() {
            write!(f, "/{component}")?;
        }

        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PathError::InvalidFormat(s.to_owned());

        let rest = s.strip_prefix('m').ok_or_else(invalid)?;
        if rest.is_empty() {
            return Ok(Self::default());
        }

        let components = rest
            .strip_prefix('/')
            .ok_or_else(invalid)?
            .split('/')
            .map(|segment| segment.parse().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;

        Ok(Self { components })
    }
}

/// A hierarchical path component.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Component {
    /// Component to generate a hardened child key.
    Hardened(u32),
    /// Component to generate a normal child key.
    Normal(u32),
}

impl Component {
    /// Returns the numerical value of the component, without the hardened
    /// flag.
    pub fn value(self) -> u32 {
        match self {
            Self::Hardened(value) | Self::Normal(value) => value,
        }
    }

    /// Returns the BIP-0032 child index, with the hardened flag set for
    /// hardened components.
    pub fn index(self) -> u32 {
        match self {
            Self::Hardened(value) => value | HARDENED,
            Self::Normal(value) => value,
        }
    }

    /// Returns `true` for hardened components.
    pub fn is_hardened(self) -> bool {
        matches!(self, Self::Hardened(_))
    }
}

/// Converts a raw BIP-0032 child index into a component.
impl From<u32> for Component {
    fn from(index: u32) -> Self {
        if index & HARDENED != 0 {
            Self::Hardened(index & !HARDENED)
        } else {
            Self::Normal(index)
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Hardened(value) => write!(f, "{value}'"),
            Self::Normal(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Component {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PathError::InvalidFormat(s.to_owned());

        let (value, hardened) = match s.strip_suffix('\'') {
            Some(value) => (value, true),
            None => (s, false),
        };

        // NOTE: `u32::from_str` accepts a leading '+', so check for digits
        // explicitly.
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = value
            .parse::<u32>()
            .ok()
            .filter(|value| value & HARDENED == 0)
            .ok_or_else(invalid)?;

        Ok(if hardened {
            Component::Hardened(value)
        } else {
            Component::Normal(value)
        })
    }
}

/// Policy restricting which derivation paths are accepted.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct PathPolicy {
    /// The maximum number of components after the master node.
    pub max_depth: usize,
    /// The allowed values for the first path component.
    pub purposes: Vec<u32>,
}

impl Default for PathPolicy {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            purposes: DEFAULT_PURPOSES.to_vec(),
        }
    }
}

impl PathPolicy {
    /// Checks that a parsed path satisfies the policy.
    pub fn validate(&self, path: &Path) -> Result<(), PathError> {
        if path.depth() > self.max_depth {
            return Err(PathError::TooDeep {
                depth: path.depth(),
                max: self.max_depth,
            });
        }
        if let Some(purpose) = path.purpose() {
            if !self.purposes.contains(&purpose) {
                return Err(PathError::InvalidPurpose(purpose));
            }
        }

        Ok(())
    }

    /// Parses a path and checks it against the policy.
    pub fn parse(&self, path: &str) -> Result<Path, PathError> {
        let path = parse_path(path)?;
        self.validate(&path)?;
        Ok(path)
    }
}

/// Parses a derivation path, only checking its grammar.
pub fn parse_path(path: &str) -> Result<Path, PathError> {
    path.parse()
}

/// Parses a derivation path and validates it against the default policy.
pub fn validate_path(path: &str) -> Result<Path, PathError> {
    PathPolicy::default().parse(path)
}
