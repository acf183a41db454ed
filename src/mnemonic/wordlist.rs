//! Module containing the embedded BIP-0039 word lists.

use crate::mnemonic::Language;
use std::{collections::HashMap, sync::OnceLock};

/// A parsed word list along with its reverse index.
///
/// Word lists are built at most once per process and never modified
/// afterwards, so they can be shared freely between threads.
pub struct Wordlist {
    words: Vec<&'static str>,
    index: HashMap<&'static str, usize>,
}

/// The number of words in a list, as defined in BIP-0039.
pub const WORD_COUNT: usize = 2048;

impl Wordlist {
    /// Parses a list of newline-separated words.
    fn parse(words: &'static str) -> Self {
        let words = words.trim().lines().map(str::trim).collect::<Vec<_>>();

        debug_assert_eq!(words.len(), WORD_COUNT);
        debug_assert!(words
            .iter()
            .all(|word| word.chars().all(char::is_lowercase)));
        debug_assert!(words.windows(2).all(|pair| pair[0] < pair[1]));

        let index = words
            .iter()
            .enumerate()
            .map(|(i, &word)| (word, i))
            .collect();

        Self { words, index }
    }

    /// Searches the word list for the specified word returning its numerical
    /// value representing its index in the list. This method returns `None`
    /// if the word does not belong to the list.
    pub fn search(&self, word: impl AsRef<str>) -> Option<usize> {
        self.index.get(word.as_ref()).copied()
    }

    /// Returns the word for the specified index.
    ///
    /// # Panics
    ///
    /// This method panics if the index is out of range for the BIP-0039 word
    /// list: it must be less than `WORD_COUNT` or `2048`.
    pub fn word(&self, index: usize) -> &'static str {
        assert!(index < WORD_COUNT, "invalid word index");
        self.words[index]
    }
}

macro_rules! match_language {
    ($lang:expr; $(
        $l:ident => $f:expr,
    )*) => {
        match $lang {$(
            Language::$l => {
                static WORDLIST: OnceLock<Wordlist> = OnceLock::new();
                WORDLIST.get_or_init(|| {
                    Wordlist::parse(include_str!(concat!("wordlist/", $f)))
                })
            }
        )*}
    };
}

/// Retrieves the wordlist for the specified language.
pub fn for_language(language: Language) -> &'static Wordlist {
    match_language! { language;
        English => "english.txt",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wordlists() {
        let wordlist = for_language(Language::English);
        assert_eq!(wordlist.word(0), "abandon");
        assert_eq!(wordlist.word(WORD_COUNT - 1), "zoo");
    }

    #[test]
    fn reverse_index_matches_words() {
        let wordlist = for_language(Language::English);
        for index in 0..WORD_COUNT {
            assert_eq!(wordlist.search(wordlist.word(index)), Some(index));
        }
        assert_eq!(wordlist.search("klingon"), None);
        assert_eq!(wordlist.search("Abandon"), None);
    }
}
