//! Module implementing the hierarchical deterministic key derivation scheme.
//!
//! Child derivation follows BIP-0032. An index whose child scalar would be
//! out of range is reported as an error instead of silently advancing to the
//! next index, so that a given seed and path always map to the same key.

mod path;

pub use self::path::{
    parse_path, validate_path, Component, Path, PathError, PathPolicy, HARDENED,
};
use crate::{
    account::{Keypair, PrivateKey, PublicKey},
    config::Config,
    entropy::Entropy,
    hash,
    mnemonic::{Language, Mnemonic, Seed},
};
use k256::{
    elliptic_curve::PrimeField as _, FieldBytes, NonZeroScalar, ProjectivePoint, Scalar,
    SecretKey,
};
use serde::Deserialize;
use std::{
    fmt::{self, Debug, Formatter},
    ops::RangeInclusive,
};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// The HMAC key used for deriving the master node from a seed.
const MASTER_KEY: &[u8] = b"Bitcoin seed";

/// The accepted seed lengths in bytes for deriving a master node.
pub const SEED_LENGTHS: RangeInclusive<usize> = 16..=64;

/// Errors deriving extended keys.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum DerivationError {
    #[error("seed must be between 16 and 64 bytes but got {0}")]
    InvalidSeedLength(usize),
    #[error("seed yields an invalid master key")]
    InvalidMasterKey,
    #[error("path component {0} yields an invalid child key")]
    InvalidChildKey(Component),
    #[error("cannot derive hardened child {0} from a public key")]
    HardenedFromPublic(Component),
    #[error("maximum extended key depth exceeded")]
    DepthExceeded,
    #[error("extended key does not have a private key")]
    MissingPrivateKey,
}

/// Encoding of the parent private key in hardened child derivation.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum DerivationScheme {
    /// The BIP-0032 encoding, where the parent scalar is always 32 bytes.
    #[default]
    Standard,
    /// The historical `btcutil` encoding (issue 172), where a derived parent
    /// scalar with leading zero bytes is shortened and left aligned. Only
    /// hardened children of such parents differ from [`Self::Standard`].
    LegacyUnpadded,
}

/// A BIP-0032 chain code.
#[derive(Clone, Eq, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct ChainCode([u8; 32]);

impl ChainCode {
    /// Returns the chain code bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Debug for ChainCode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("ChainCode(..)")
    }
}

#[derive(Clone)]
enum NodeKey {
    Private(PrivateKey),
    Public(PublicKey),
}

/// An extended key: a node in the BIP-0032 key tree.
#[derive(Clone)]
pub struct ExtendedKey {
    key: NodeKey,
    chain_code: ChainCode,
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_number: u32,
}

impl ExtendedKey {
    /// Creates the master extended private key from a seed.
    pub fn master(seed: impl AsRef<[u8]>) -> Result<Self, DerivationError> {
        let seed = seed.as_ref();
        if !SEED_LENGTHS.contains(&seed.len()) {
            return Err(DerivationError::InvalidSeedLength(seed.len()));
        }

        let i = hash::hmac_sha512(MASTER_KEY, &[seed]);
        let (il, ir) = i.split_at(32);
        let secret = SecretKey::from_slice(il).map_err(|_| DerivationError::InvalidMasterKey)?;

        let master = Self {
            key: NodeKey::Private(secret.into()),
            chain_code: chain_code(ir),
            depth: 0,
            parent_fingerprint: [0; 4],
            child_number: 0,
        };
        tracing::debug!(fingerprint = %hex::encode(master.fingerprint()), "derived master key");

        Ok(master)
    }

    /// Returns the depth of the node in the key tree, 0 for the master node.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Returns the fingerprint of the parent node.
    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.parent_fingerprint
    }

    /// Returns the child index used to derive this node, including the
    /// hardened flag.
    pub fn child_number(&self) -> u32 {
        self.child_number
    }

    /// Returns the chain code.
    pub fn chain_code(&self) -> &ChainCode {
        &self.chain_code
    }

    /// Returns the key fingerprint: the first 4 bytes of the HASH160 of the
    /// compressed public key.
    pub fn fingerprint(&self) -> [u8; 4] {
        let hash = hash::hash160(self.public_key().encode_compressed());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    /// Returns `true` if the node has a private key.
    pub fn is_private(&self) -> bool {
        matches!(self.key, NodeKey::Private(_))
    }

    /// Returns the public key of the node.
    pub fn public_key(&self) -> PublicKey {
        match &self.key {
            NodeKey::Private(key) => key.public(),
            NodeKey::Public(key) => *key,
        }
    }

    /// Returns the private key of the node, if it has one.
    pub fn private_key(&self) -> Option<&PrivateKey> {
        match &self.key {
            NodeKey::Private(key) => Some(key),
            NodeKey::Public(_) => None,
        }
    }

    /// Consumes the node, returning its private key.
    pub fn into_private_key(self) -> Result<PrivateKey, DerivationError> {
        self.private_key()
            .cloned()
            .ok_or(DerivationError::MissingPrivateKey)
    }

    /// Returns the public node with the same position in the key tree.
    pub fn to_public(&self) -> Self {
        Self {
            key: NodeKey::Public(self.public_key()),
            chain_code: self.chain_code.clone(),
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
            child_number: self.child_number,
        }
    }

    /// Returns `true` if hardened children of this node differ between
    /// [`DerivationScheme::Standard`] and [`DerivationScheme::LegacyUnpadded`].
    ///
    /// Master keys were always encoded with 32 bytes, so only derived private
    /// keys with a leading zero byte are affected.
    pub fn is_affected_by_unpadded_encoding(&self) -> bool {
        match &self.key {
            NodeKey::Private(key) => self.depth > 0 && key.secret()[0] == 0,
            NodeKey::Public(_) => false,
        }
    }

    /// Derives a child node.
    pub fn derive_child(
        &self,
        component: Component,
        scheme: DerivationScheme,
    ) -> Result<Self, DerivationError> {
        let depth = self
            .depth
            .checked_add(1)
            .ok_or(DerivationError::DepthExceeded)?;
        let index = component.index().to_be_bytes();

        let (key, chain_code) = match &self.key {
            NodeKey::Private(parent) => {
                let i = if component.is_hardened() {
                    let data = self.hardened_data(parent, scheme);
                    hash::hmac_sha512(self.chain_code.as_bytes(), &[&data[..], &index[..]])
                } else {
                    let data = parent.public().encode_compressed();
                    hash::hmac_sha512(self.chain_code.as_bytes(), &[&data[..], &index[..]])
                };
                let (il, ir) = i.split_at(32);

                let tweak = scalar(il).ok_or(DerivationError::InvalidChildKey(component))?;
                let child = Option::<NonZeroScalar>::from(NonZeroScalar::new(
                    tweak + *parent.as_secret_key().to_nonzero_scalar(),
                ))
                .ok_or(DerivationError::InvalidChildKey(component))?;

                (NodeKey::Private(SecretKey::from(child).into()), chain_code(ir))
            }
            NodeKey::Public(parent) => {
                if component.is_hardened() {
                    return Err(DerivationError::HardenedFromPublic(component));
                }

                let data = parent.encode_compressed();
                let i = hash::hmac_sha512(self.chain_code.as_bytes(), &[&data[..], &index[..]]);
                let (il, ir) = i.split_at(32);

                let tweak = scalar(il).ok_or(DerivationError::InvalidChildKey(component))?;
                let point = ProjectivePoint::GENERATOR * tweak + parent.0.to_projective();
                let child = k256::PublicKey::from_affine(point.to_affine())
                    .map_err(|_| DerivationError::InvalidChildKey(component))?;

                (NodeKey::Public(child.into()), chain_code(ir))
            }
        };

        Ok(Self {
            key,
            chain_code,
            depth,
            parent_fingerprint: self.fingerprint(),
            child_number: component.index(),
        })
    }

    /// Returns the parent key data for a hardened child: a zero byte followed
    /// by the 32-byte key slot.
    fn hardened_data(&self, parent: &PrivateKey, scheme: DerivationScheme) -> Zeroizing<[u8; 33]> {
        let secret = parent.secret();
        let mut data = Zeroizing::new([0u8; 33]);
        match scheme {
            DerivationScheme::Standard => data[1..].copy_from_slice(&secret[..]),
            DerivationScheme::LegacyUnpadded => {
                let start = if self.is_affected_by_unpadded_encoding() {
                    secret.iter().position(|&byte| byte != 0).unwrap_or(32)
                } else {
                    0
                };
                data[1..33 - start].copy_from_slice(&secret[start..]);
            }
        }
        data
    }
}

impl Debug for ExtendedKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("private", &self.is_private())
            .field("depth", &self.depth)
            .field("parent_fingerprint", &hex::encode(self.parent_fingerprint))
            .field("child_number", &self.child_number)
            .finish_non_exhaustive()
    }
}

fn chain_code(bytes: &[u8]) -> ChainCode {
    let mut chain_code = ChainCode([0; 32]);
    chain_code.0.copy_from_slice(bytes);
    chain_code
}

/// Parses the left half of an HMAC output as a scalar, returning `None` if it
/// is not smaller than the curve order.
fn scalar(bytes: &[u8]) -> Option<Scalar> {
    Scalar::from_repr(FieldBytes::clone_from_slice(bytes)).into()
}

/// Creates the master extended private key from a seed.
pub fn master_from_seed(seed: impl AsRef<[u8]>) -> Result<ExtendedKey, DerivationError> {
    ExtendedKey::master(seed)
}

/// Derives a child node using the standard BIP-0032 encoding.
pub fn derive_child(
    parent: &ExtendedKey,
    component: Component,
) -> Result<ExtendedKey, DerivationError> {
    parent.derive_child(component, DerivationScheme::Standard)
}

/// Walks a path from a node using the standard BIP-0032 encoding.
pub fn walk_path(node: &ExtendedKey, path: &Path) -> Result<ExtendedKey, DerivationError> {
    walk_path_with(node, path, DerivationScheme::Standard)
}

/// Walks a path from a node, deriving one child per path component.
pub fn walk_path_with(
    node: &ExtendedKey,
    path: &Path,
    scheme: DerivationScheme,
) -> Result<ExtendedKey, DerivationError> {
    let leaf = path
        .components()
        .try_fold(node.clone(), |node, component| {
            node.derive_child(component, scheme)
        })?;
    tracing::debug!(%path, ?scheme, depth = leaf.depth, "walked derivation path");

    Ok(leaf)
}

/// Derives the private key at a path from a seed.
pub fn derive(seed: impl AsRef<[u8]>, path: &Path) -> Result<PrivateKey, DerivationError> {
    walk_path(&master_from_seed(seed)?, path)?.into_private_key()
}

/// Derives the private key at a path from a mnemonic and passphrase.
pub fn derive_from_mnemonic(
    mnemonic: &Mnemonic,
    passphrase: &str,
    path: &Path,
) -> Result<PrivateKey, DerivationError> {
    derive(mnemonic.seed(passphrase), path)
}

/// Derives the account keypair at a path from a seed, applying the path and
/// key policies and the derivation scheme of the configuration.
pub fn derive_account(seed: &Seed, path: &Path, config: &Config) -> Result<Keypair, crate::Error> {
    config.path.validate(path)?;
    let node = walk_path_with(&master_from_seed(seed)?, path, config.derivation)?;
    let key = node.into_private_key()?;
    crate::account::validate_secret_key(&key, &config.key)?;

    Ok(Keypair::from(key))
}

/// Encodes the master private key of a seed as a 24-word mnemonic.
///
/// The phrase backs up the master key itself rather than the seed: feeding
/// it back through [`Mnemonic::seed`] yields an unrelated wallet.
pub fn master_mnemonic(
    seed: impl AsRef<[u8]>,
    language: Language,
) -> Result<Mnemonic, crate::Error> {
    let key = master_from_seed(seed)?.into_private_key()?;
    let entropy = Entropy::new(&*key.secret())?;
    Ok(Mnemonic::from_entropy(language, entropy))
}
