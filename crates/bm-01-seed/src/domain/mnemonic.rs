//! # Recovery Phrases
//!
//! Each word carries 11 bits, an index into a frozen 2048-word list. The
//! locale only picks the list; the bit layout is the same for every locale.
//!
//! ## Layouts
//!
//! ```text
//! 24 words (v1): network(8)  | core(256)            = 264 bits
//! 12 words (v2): core(128)   | check(3) | network(1) = 132 bits
//! ```
//!
//! The long form has no spare bits for a checksum, so its leading byte must
//! be a known network value. The short form carries three check bits taken
//! from the top of `SHA3-256(core)[0]`.

use crate::domain::errors::SeedError;
use crate::domain::seed::{Seed, SeedVersion};
use bip39::Language;
use shared_crypto::sha3_256;
use shared_types::Network;
use std::fmt;
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const BITS_PER_WORD: usize = 11;

const CHECK_MASK: u8 = 0b1110;

/// Wordlist locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    TraditionalChinese,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::TraditionalChinese];

    fn language(self) -> Language {
        match self {
            Locale::English => Language::English,
            Locale::TraditionalChinese => Language::TraditionalChinese,
        }
    }

    fn word_list(self) -> &'static [&'static str; 2048] {
        self.language().word_list()
    }

    fn normalize(self, word: &str) -> String {
        match self {
            Locale::English => word.trim().to_lowercase(),
            Locale::TraditionalChinese => word.trim().to_string(),
        }
    }

    fn index_of(self, word: &str) -> Option<u16> {
        let word = self.normalize(word);
        self.word_list()
            .iter()
            .position(|w| *w == word)
            .map(|i| i as u16)
    }

    fn word(self, index: u16) -> &'static str {
        self.word_list()[index as usize & 0x7ff]
    }
}

/// An ordered recovery phrase in one locale.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RecoveryPhrase {
    words: Vec<String>,
    #[zeroize(skip)]
    locale: Locale,
}

impl RecoveryPhrase {
    /// Phrase for a seed. Version 1 gives 24 words, version 2 gives 12.
    pub fn from_seed(seed: &Seed, locale: Locale) -> Self {
        let bits = Zeroizing::new(phrase_bits(seed));
        let indices = Zeroizing::new(bits_to_indices(&bits, seed.version().word_count()));
        let words = indices
            .iter()
            .map(|&i| locale.word(i).to_string())
            .collect();
        Self { words, locale }
    }

    /// Parse a whitespace separated phrase.
    pub fn parse(phrase: &str) -> Result<Self, SeedError> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        Self::from_words(&words)
    }

    /// Build from individual words, detecting the locale from the first one.
    ///
    /// Every word must then belong to that same locale.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, SeedError> {
        let words: Vec<&str> = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .collect();

        let first = words.first().ok_or(SeedError::EmptyPhrase)?;
        if SeedVersion::from_word_count(words.len()).is_none() {
            return Err(SeedError::InvalidWordCount(words.len()));
        }

        let locale = Locale::ALL
            .into_iter()
            .find(|l| l.index_of(first).is_some())
            .ok_or_else(|| SeedError::UnknownWord(first.to_string()))?;

        let mut normalized = Vec::with_capacity(words.len());
        for word in &words {
            if locale.index_of(word).is_none() {
                return Err(SeedError::UnknownWord(word.to_string()));
            }
            normalized.push(locale.normalize(word));
        }

        Ok(Self {
            words: normalized,
            locale,
        })
    }

    /// Recover the seed, verifying the embedded check bits.
    pub fn to_seed(&self) -> Result<Seed, SeedError> {
        let version = SeedVersion::from_word_count(self.words.len())
            .ok_or(SeedError::InvalidWordCount(self.words.len()))?;

        let mut indices = Zeroizing::new(Vec::with_capacity(self.words.len()));
        for word in &self.words {
            let index = self
                .locale
                .index_of(word)
                .ok_or_else(|| SeedError::UnknownWord(word.clone()))?;
            indices.push(index);
        }
        let bits = Zeroizing::new(indices_to_bits(&indices));

        let seed = match version {
            SeedVersion::V1 => {
                let network = Network::from_value(bits[0]).ok_or_else(|| {
                    warn!(marker = bits[0], "recovery phrase has no valid network marker");
                    SeedError::PhraseChecksumMismatch
                })?;
                Seed::new(&bits[1..33], network, version.value())?
            }
            SeedVersion::V2 => {
                let core = &bits[..16];
                let tail = bits[16] >> 4;
                if tail & CHECK_MASK != check_bits(core) {
                    warn!("recovery phrase check bits mismatch");
                    return Err(SeedError::PhraseChecksumMismatch);
                }
                let network = if tail & 0x01 == 1 {
                    Network::Testnet
                } else {
                    Network::Livenet
                };
                Seed::new(core, network, version.value())?
            }
        };

        debug!(words = self.words.len(), network = %seed.network(), "recovered seed from phrase");
        Ok(seed)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for RecoveryPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

impl fmt::Debug for RecoveryPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoveryPhrase")
            .field("words", &self.words.len())
            .field("locale", &self.locale)
            .finish()
    }
}

fn check_bits(core: &[u8]) -> u8 {
    (sha3_256(core)[0] >> 4) & CHECK_MASK
}

/// Bit string behind a phrase, left-aligned in whole bytes.
fn phrase_bits(seed: &Seed) -> Vec<u8> {
    let network = seed.network().value();
    match seed.version() {
        SeedVersion::V1 => {
            let mut bits = Vec::with_capacity(33);
            bits.push(network);
            bits.extend_from_slice(seed.core());
            bits
        }
        SeedVersion::V2 => {
            let tail = check_bits(seed.core()) | network;
            let mut bits = Vec::with_capacity(17);
            bits.extend_from_slice(seed.core());
            bits.push(tail << 4);
            bits
        }
    }
}

/// Split the leading `count * 11` bits into word indices, MSB first.
fn bits_to_indices(bytes: &[u8], count: usize) -> Vec<u16> {
    (0..count)
        .map(|word| {
            (0..BITS_PER_WORD).fold(0u16, |acc, bit| {
                let pos = word * BITS_PER_WORD + bit;
                let set = (bytes[pos / 8] >> (7 - pos % 8)) & 1;
                (acc << 1) | set as u16
            })
        })
        .collect()
}

/// Pack word indices back into bytes, zero-padding the final byte.
fn indices_to_bits(indices: &[u16]) -> Vec<u8> {
    let total = indices.len() * BITS_PER_WORD;
    let mut bytes = vec![0u8; total.div_ceil(8)];
    for (word, &index) in indices.iter().enumerate() {
        for bit in 0..BITS_PER_WORD {
            if (index >> (BITS_PER_WORD - 1 - bit)) & 1 == 1 {
                let pos = word * BITS_PER_WORD + bit;
                bytes[pos / 8] |= 1 << (7 - pos % 8);
            }
        }
    }
    bytes
}
