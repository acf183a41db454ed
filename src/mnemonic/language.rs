//! Mnemonic language for selecting word lists.

use crate::mnemonic::{
    wordlist::{self, Wordlist},
    MnemonicError,
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// The mnemonic langage used to select the word list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Language {
    #[default]
    English,
    // TODO(nlordell): Support more languages. Note that this is not necessarily
    // trivial as some have specific considerations (like 'ñ' being equivalent
    // to 'n' in Spanish, and Japanese using '\u{3000}` for spaces).
}

impl Language {
    /// Splits an NFKD normalized mnemonic phrase into its words, returning the
    /// detected language along with the words.
    pub fn split(phrase: &str) -> (Self, Vec<&str>) {
        (Language::English, phrase.split_whitespace().collect())
    }

    /// Returns the language's wordlist.
    pub fn wordlist(self) -> &'static Wordlist {
        wordlist::for_language(self)
    }

    /// Returns the whitespace separator character for the language.
    pub fn separator(self) -> char {
        ' '
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Language::English => "English",
        })
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" => Ok(Language::English),
            _ => Err(MnemonicError::UnsupportedLanguage(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_names() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(MnemonicError::UnsupportedLanguage(_)),
        ));
    }

    #[test]
    fn splits_on_any_whitespace() {
        let (language, words) = Language::split("  zoo\tzoo\n  wrong ");
        assert_eq!(language, Language::English);
        assert_eq!(words, ["zoo", "zoo", "wrong"]);
    }
}
