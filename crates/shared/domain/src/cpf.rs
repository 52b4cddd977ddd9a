//! CPF document value object.
//!
//! A CPF is an 11-digit Brazilian taxpayer number whose last two digits are
//! modulo-11 check digits computed over the preceding ones.

use std::fmt;

use crate::constants::CPF_LENGTH;

const FIRST_DIGIT_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_DIGIT_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Leading characters left visible by [`mask`].
const MASK_KEEP_PREFIX: usize = 3;
/// Trailing characters left visible by [`mask`].
const MASK_KEEP_SUFFIX: usize = 2;

/// CPF value object holding the cleaned (digits-only) form.
///
/// Validity is computed on demand and never cached. `Debug` prints the
/// masked value so the document never reaches logs in cleartext.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Build a CPF from raw user input, stripping every non-digit character.
    pub fn new(raw: &str) -> Self {
        Self(clean(raw))
    }

    /// Canonical digits-only form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the length and both check digits.
    pub fn is_valid(&self) -> bool {
        is_valid(&self.0)
    }

    /// Masked form for logging.
    pub fn mask(&self) -> String {
        mask(&self.0)
    }

    /// `XXX.XXX.XXX-XX` when valid, the cleaned digits otherwise.
    pub fn formatted(&self) -> String {
        format(&self.0)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl fmt::Debug for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cpf").field(&self.mask()).finish()
    }
}

/// Strip every character that is not an ASCII digit.
pub fn clean(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Validate an already-cleaned CPF.
///
/// Anything that is not exactly 11 ASCII digits is invalid. Repeated-digit
/// values such as `00000000000` pass when their checksum matches.
pub fn is_valid(cpf: &str) -> bool {
    if cpf.len() != CPF_LENGTH || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = cpf.bytes().map(|b| u32::from(b - b'0')).collect();

    let first = check_digit(&digits[..9], &FIRST_DIGIT_WEIGHTS);

    let mut with_first = digits[..9].to_vec();
    with_first.push(first);
    let second = check_digit(&with_first, &SECOND_DIGIT_WEIGHTS);

    digits[9] == first && digits[10] == second
}

/// Hide everything but the first 3 and last 2 characters.
///
/// Inputs too short to keep both ends are masked entirely.
pub fn mask(cpf: &str) -> String {
    let chars: Vec<char> = cpf.chars().collect();
    let len = chars.len();

    if len <= MASK_KEEP_PREFIX + MASK_KEEP_SUFFIX {
        return "*".repeat(len);
    }

    let mut masked = String::with_capacity(len);
    masked.extend(&chars[..MASK_KEEP_PREFIX]);
    masked.push_str(&"*".repeat(len - MASK_KEEP_PREFIX - MASK_KEEP_SUFFIX));
    masked.extend(&chars[len - MASK_KEEP_SUFFIX..]);
    masked
}

/// Group a valid CPF as `XXX.XXX.XXX-XX`; invalid input is returned as is.
pub fn format(cpf: &str) -> String {
    if !is_valid(cpf) {
        return cpf.to_string();
    }

    format!(
        "{}.{}.{}-{}",
        &cpf[0..3],
        &cpf[3..6],
        &cpf[6..9],
        &cpf[9..11]
    )
}

fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let remainder = weighted_sum(digits, weights) % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}
