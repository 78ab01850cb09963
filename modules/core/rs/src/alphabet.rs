use std::fmt::{Display, Formatter};
use std::sync::Arc;

use derive_getters::{Dissolve, Getters};
use eyre::{eyre, Result};

/// An ordered set of distinct byte symbols. The code of a symbol is its position in the set.
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Dissolve)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    pub fn new(symbols: impl Into<Vec<u8>>) -> Result<Self> {
        let symbols = symbols.into();
        if symbols.is_empty() {
            return Err(eyre!("Alphabet must contain at least one symbol"));
        }
        if symbols.len() > u8::MAX as usize + 1 {
            return Err(eyre!(
                "Alphabet can't contain more than 256 symbols, got {}",
                symbols.len()
            ));
        }
        for (ind, symbol) in symbols.iter().enumerate() {
            if symbols[..ind].contains(symbol) {
                return Err(eyre!(
                    "Duplicated symbol '{}' in the alphabet",
                    symbol.escape_ascii()
                ));
            }
        }
        Ok(Self { symbols })
    }

    /// Unambiguous DNA alphabet: A, C, G, T coded as 0, 1, 2, 3.
    pub fn nucleotides() -> Self {
        Self {
            symbols: b"ACGT".to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn encode(&self, symbol: u8) -> Result<u8> {
        self.symbols
            .iter()
            .position(|x| *x == symbol)
            .map(|x| x as u8)
            .ok_or_else(|| {
                eyre!(
                    "Symbol '{}' is not part of the alphabet {}",
                    symbol.escape_ascii(),
                    self
                )
            })
    }

    pub fn decode(&self, code: u8) -> Result<u8> {
        self.symbols.get(code as usize).copied().ok_or_else(|| {
            eyre!(
                "Code {} is out of range for the alphabet {} (size {})",
                code,
                self,
                self.len()
            )
        })
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.symbols.escape_ascii())
    }
}

/// A sequence stored as symbol codes of a shared alphabet.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Getters, Dissolve)]
pub struct EncodedSequence {
    alphabet: Arc<Alphabet>,
    codes: Vec<u8>,
}

impl EncodedSequence {
    pub fn new(alphabet: Arc<Alphabet>, text: &[u8]) -> Result<Self> {
        let mut codes = Vec::with_capacity(text.len());
        for (pos, symbol) in text.iter().enumerate() {
            let code = alphabet
                .encode(*symbol)
                .map_err(|err| err.wrap_err(format!("Failed to encode position {pos}")))?;
            codes.push(code);
        }
        Ok(Self { alphabet, codes })
    }

    pub fn from_codes(alphabet: Arc<Alphabet>, codes: Vec<u8>) -> Result<Self> {
        if let Some(pos) = codes
            .iter()
            .position(|code| *code as usize >= alphabet.len())
        {
            return Err(eyre!(
                "Code {} at position {} is out of range for the alphabet {}",
                codes[pos],
                pos,
                alphabet
            ));
        }
        Ok(Self { alphabet, codes })
    }

    /// Translate codes back to the alphabet symbols.
    pub fn decode(&self) -> Vec<u8> {
        // Codes are validated on construction
        self.codes
            .iter()
            .map(|code| self.alphabet.symbols()[*code as usize])
            .collect()
    }
}
