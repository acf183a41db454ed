//! BIP-0039 mnemonic phrase implementation.

mod language;
mod seed;
mod wordlist;

pub use self::{language::Language, seed::Seed, wordlist::WORD_COUNT};
use crate::{
    entropy::{Entropy, EntropyError},
    hash,
};
use hmac::Hmac;
use sha2::Sha512;
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization as _;
use zeroize::Zeroizing;

/// The word counts of the supported mnemonic lengths.
pub const WORD_LENGTHS: [usize; 5] = [12, 15, 18, 21, 24];

/// Masking value for a mnemonic word.
const WORD_MASK: usize = WORD_COUNT - 1;
/// The number of bits represented by each mnemonic word.
const WORD_BITS: usize = WORD_MASK.count_ones() as _;

/// The number of PBKDF2 rounds used to stretch a mnemonic into a seed.
const SEED_ROUNDS: u32 = 2048;

/// An error decoding or generating a mnemonic.
#[derive(Debug, Error)]
pub enum MnemonicError {
    #[error("invalid mnemonic word count {0}, expected 12, 15, 18, 21 or 24")]
    InvalidWordCount(usize),
    #[error("invalid BIP-0039 {language} word '{word}'")]
    InvalidWord { language: Language, word: String },
    #[error("mnemonic checksum verification failure")]
    InvalidChecksum,
    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(String),
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// A BIP-0039 mnemonic used for seeding an HD wallet.
#[derive(Clone, Eq, PartialEq)]
pub struct Mnemonic {
    /// The language for the mnemonic phrase.
    language: Language,
    /// The entropy encoded by the mnemonic phrase, without the checksum.
    entropy: Entropy,
}

impl Mnemonic {
    /// Generates a new cryptographically random mnemonic with the specified
    /// word length.
    ///
    /// The underlying entropy is not checked against the quality gate, see
    /// [`crate::entropy::validate_entropy`] for that.
    pub fn random(language: Language, mnemonic_length: usize) -> Result<Self, MnemonicError> {
        let len = mnemonic_to_byte_length(mnemonic_length)?;
        let entropy = Entropy::generate(len * 8)?;
        Ok(Self::from_entropy(language, entropy))
    }

    /// Creates a mnemonic encoding the specified entropy.
    pub fn from_entropy(language: Language, entropy: Entropy) -> Self {
        Self { language, entropy }
    }

    /// Parses a mnemonic from a phrase, verifying its checksum.
    pub fn from_phrase(mnemonic: impl AsRef<str>) -> Result<Self, MnemonicError> {
        let phrase = Zeroizing::new(mnemonic.as_ref().nfkd().collect::<String>());
        let (language, words) = Language::split(&phrase);

        let len = mnemonic_to_byte_length(words.len())?;
        let wordlist = language.wordlist();

        // NOTE: Room for the longest entropy followed by one checksum byte.
        // Checksums are at most 8 bits, so they always fit in `buf[len]`.
        let mut buf = Zeroizing::new([0u8; 33]);
        let mut acc = 0u32;
        let mut bit_offset = 0;
        let mut byte_offset = 0;
        for word in &words {
            let index = wordlist
                .search(word)
                .ok_or_else(|| MnemonicError::InvalidWord {
                    language,
                    word: word.to_string(),
                })?;
            acc = (acc << WORD_BITS) | index as u32;

            bit_offset += WORD_BITS;
            while bit_offset >= 8 {
                bit_offset -= 8;
                buf[byte_offset] = (acc >> bit_offset) as u8;
                byte_offset += 1;
            }
        }
        if bit_offset > 0 {
            buf[byte_offset] = (acc << (8 - bit_offset)) as u8;
        }

        let entropy = Entropy::new(&buf[..len])?;
        if buf[len] != checksum(&entropy) {
            return Err(MnemonicError::InvalidChecksum);
        }

        Ok(Self { language, entropy })
    }

    /// Returns the mnemonic's language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the entropy encoded by the mnemonic.
    pub fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    /// Gets the BIP-0039 mnemonic word length.
    pub fn mnemonic_length(&self) -> usize {
        // NOTE: Every 32 bits of entropy add one checksum bit.
        self.entropy.bits() * 33 / 32 / WORD_BITS
    }

    /// Returns the BIP-0039 mnemonic phrase.
    pub fn to_phrase(&self) -> String {
        let wordlist = self.language.wordlist();
        let separator = self.language.separator();

        let entropy = self.entropy.as_bytes();
        let mut data = Zeroizing::new([0u8; 33]);
        data[..entropy.len()].copy_from_slice(entropy);
        data[entropy.len()] = checksum(&self.entropy);

        let mut buf = String::new();
        let mut acc = 0u32;
        let mut bit_offset = 0;
        let mut remaining = self.mnemonic_length();
        for &byte in &data[..=entropy.len()] {
            acc = (acc << 8) | byte as u32;
            bit_offset += 8;
            if bit_offset >= WORD_BITS && remaining > 0 {
                bit_offset -= WORD_BITS;
                remaining -= 1;

                buf.push_str(wordlist.word((acc >> bit_offset) as usize & WORD_MASK));
                buf.push(separator);
            }
        }

        buf.pop();
        buf
    }

    /// Gets the PBKDF2 stretched binary seed for this mnemonic and passphrase.
    ///
    /// Both the phrase and passphrase are NFKD normalized before stretching.
    pub fn seed(&self, passphrase: &str) -> Seed {
        let phrase = Zeroizing::new(self.to_phrase());
        let password = Zeroizing::new(phrase.nfkd().collect::<String>());
        let salt = Zeroizing::new(
            "mnemonic"
                .chars()
                .chain(passphrase.nfkd())
                .collect::<String>(),
        );

        let mut seed = Seed([0; 64]);
        pbkdf2::pbkdf2::<Hmac<Sha512>>(
            password.as_bytes(),
            salt.as_bytes(),
            SEED_ROUNDS,
            &mut seed.0,
        )
        .expect("HMAC can take a key of any size");

        tracing::debug!(words = self.mnemonic_length(), "stretched mnemonic seed");
        seed
    }
}

impl Debug for Mnemonic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("language", &self.language)
            .field("words", &self.mnemonic_length())
            .finish_non_exhaustive()
    }
}

impl Display for Mnemonic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&Zeroizing::new(self.to_phrase()))
    }
}

impl FromStr for Mnemonic {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_phrase(s)
    }
}

/// Encodes entropy as an English mnemonic.
pub fn entropy_to_mnemonic(entropy: &Entropy) -> Mnemonic {
    Mnemonic::from_entropy(Language::English, entropy.clone())
}

/// Decodes a mnemonic phrase back into its entropy, verifying the checksum.
pub fn mnemonic_to_entropy(mnemonic: &str) -> Result<Entropy, MnemonicError> {
    Ok(Mnemonic::from_phrase(mnemonic)?.entropy)
}

/// Stretches a mnemonic phrase into a seed.
///
/// The phrase is fully validated first, so a phrase with an unknown word or a
/// bad checksum never produces a seed.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Result<Seed, MnemonicError> {
    Ok(Mnemonic::from_phrase(mnemonic)?.seed(passphrase))
}

/// Returns whether or not a phrase is a valid mnemonic.
pub fn is_valid(mnemonic: &str) -> bool {
    Mnemonic::from_phrase(mnemonic).is_ok()
}

/// Computes the checksum byte for some entropy: the first `bits / 32` bits of
/// its SHA256 hash, with the remaining low bits cleared.
fn checksum(entropy: &Entropy) -> u8 {
    let bits = entropy.bits() / 32;
    hash::sha256(entropy)[0] & (0xff00_u16 >> bits) as u8
}

fn mnemonic_to_byte_length(len: usize) -> Result<usize, MnemonicError> {
    if !WORD_LENGTHS.contains(&len) {
        return Err(MnemonicError::InvalidWordCount(len));
    }

    // NOTE: Derived from the BIP-0039 spec where `CS` is the checksum bit
    // length, `ENT` is the entropy bit length (so `8 * byte_length`) and `MS`
    // is the mnemonic word length.
    // ```
    // CS = ENT / 32
    // MS = (ENT + CS) / 11
    // ```
    // <https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki#generating-the-mnemonic>
    Ok((len * WORD_BITS * 32 / 33) / 8)
}
