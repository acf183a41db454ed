//! Known answer vectors shared by unit and integration tests.

#![allow(dead_code)]

use hex_literal::hex;

/// A 12-word mnemonic with accounts cross-checked against other wallet
/// implementations.
pub const GOLDEN_MNEMONIC: &str =
    "close same tongue random ice cave aim input whale salute squirrel vivid";

/// The seed for [`GOLDEN_MNEMONIC`] with an empty passphrase.
pub const GOLDEN_SEED: &str = "126b7f8653ce2b1f05dd78d33c57737df4edf889ee2729338202d164831e2ab4\
                               3d40d2a26d73739570cf816cb96d766b8d3850258d58c89f7e9901edf13e80a8";

/// The seed for [`GOLDEN_MNEMONIC`] with the passphrase `TREZOR`.
pub const GOLDEN_SEED_TREZOR: &str =
    "09c8d609d2b84ae4fdb44a9cf5d3e4eeda85c732e7cdf55612379aad627e8d61\
     1375446cb4b335c1bae6714e438ec2a7be173389af28a314b5b44c67d4e97143";

/// Paths, addresses and private keys derived from [`GOLDEN_MNEMONIC`].
pub const GOLDEN_ACCOUNTS: [(&str, &str, &str); 4] = [
    (
        "m/44'/60'/0'/0/0",
        "0x8B25159360826e2b02B9D7dc4cD978A6a7D1C7B7",
        "0x58d1af2b1e3a660f57e0e5583b603d5f1b94bb43b7c385eceabc69617daa7b72",
    ),
    (
        "m/44'/60'/0'/0/1",
        "0x5C58f5B2d4876Ad4Ab1eea18db5dE1d1963E6958",
        "0x325683e608c9722e3d874f8aa1291a173060fe976cab5680515912dde36fdac2",
    ),
    (
        "m/44'/60'/0'/0/5",
        "0x4AD502BB7cFf03c4d021Bcd69BBC2F1B424B01aF",
        "0x3850e1b8b995b6cd7c0868d682b9cc12e9f6ee676130283250ffb7b613e75ff3",
    ),
    (
        "m/44'/60'/1'/0/0",
        "0xdaF0B10a3cB30b2eddb1E31599aAb1e15d87799c",
        "0xfc66819f0431bf5c3609a9c13f31b0e348bac4f8cb8da65ecb828fe339b42f67",
    ),
];

/// A 24-word mnemonic.
pub const MNEMONIC_24_WORDS: &str = "armed fantasy witness similar prosper poet throw video \
                                     cannon original video zone talk swear economy bachelor \
                                     urban crunch mouse trial joy little smart marble";

/// The Ganache deterministic mnemonic.
pub const GANACHE_MNEMONIC: &str =
    "myth like bonus scare over problem client lizard pioneer submit female collect";

/// The private key of the account at index 0 derived from the Ganache
/// deterministic mnemonic.
pub const GANACHE_PRIVATE_KEY: [u8; 32] =
    hex!("4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d");

/// BIP-0032 test vector 1 seed.
pub const BIP32_SEED_1: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

/// BIP-0032 test vector 3 seed, whose master key has a leading zero byte.
pub const BIP32_SEED_3: [u8; 64] = hex!(
    "4b381541583be4423346c643850da4b320e46a87ae3d2a4e6da11eba819cd4ac"
    "ba45d239319ac14f863b8d5ab5a0d0c64d2e8a1e7d1457df2e5a3c51c73235be"
);
