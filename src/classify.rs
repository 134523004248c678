//! Classification of raw path segments into list indices or dictionary keys.
//!
//! A segment that is digits only (with an optional leading minus) is an index;
//! anything else must satisfy the key grammar: a letter or underscore followed
//! by letters, digits, `_`, `+`, `-` or `.`. Indices must fit the signed 32-bit
//! range and may not carry leading zeros.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, TermError};

pub const INDEX_MAX: i64 = i32::MAX as i64;
pub const INDEX_MIN: i64 = i32::MIN as i64;

lazy_static! {
    // digits only, with an optional minus sign
    static ref INDEX_PATTERN: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref LEADING_ZEROS_PATTERN: Regex = Regex::new(r"^-?0[0-9]+$").unwrap();
    // a digit in first position is reserved for indices
    static ref KEY_PATTERN: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_+\-.]*$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified {
    Index(i64),
    Key,
}

pub fn check_index(index: i64) -> Result<i64> {
    if index > INDEX_MAX {
        Err(TermError::IndexExceedsMaximum { index, maximum: INDEX_MAX })
    } else if index < INDEX_MIN {
        Err(TermError::IndexBelowMinimum { index, minimum: INDEX_MIN })
    } else {
        Ok(index)
    }
}

pub fn classify(term: &str) -> Result<Classified> {
    if term.is_empty() {
        return Err(TermError::EmptyKey);
    }
    if INDEX_PATTERN.is_match(term) {
        if LEADING_ZEROS_PATTERN.is_match(term) {
            return Err(TermError::LeadingZerosIndex { term: term.to_owned() });
        }
        // only overflows i64 for absurdly long digit strings
        let index = term.parse::<i64>().map_err(|_| TermError::KeyBeginsWithDigit {
            term: term.to_owned(),
        })?;
        return check_index(index).map(Classified::Index);
    }
    if KEY_PATTERN.is_match(term) {
        Ok(Classified::Key)
    } else {
        Err(TermError::InvalidKey { term: term.to_owned() })
    }
}
