// used to share canonical terms between paths and threads
use std::sync::Arc;

// custom made ordering for terms
use std::cmp::Ordering;

// used to print out readable forms of a term
use std::fmt;

use crate::error::{Result, TermError};

// ------------- Term -------------
/// One segment of a path into the configuration tree.
///
/// Terms are only made by a [`crate::keeper::TermKeeper`], which validates
/// them and hands out canonical `Arc<Term>` instances: equal input gives the
/// same allocation. Neither variant can be built directly:
///
/// ```compile_fail
/// let out_of_range = panterm::Term::Index(5_000_000_000);
/// ```
///
/// ```compile_fail
/// let not_a_key = panterm::Term::new_key("1 not a key");
/// ```
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct Term {
    value: TermValue,
}

#[derive(PartialEq, Eq, Hash, Debug, Clone)]
enum TermValue {
    Key(Arc<str>),
    Index(i64),
}

impl Term {
    // callers must have checked the key grammar
    pub(crate) fn new_key(key: &str) -> Self {
        Self { value: TermValue::Key(Arc::from(key)) }
    }
    // callers must have checked the 32-bit range
    pub(crate) fn new_index(index: i64) -> Self {
        Self { value: TermValue::Index(index) }
    }
    pub fn is_key(&self) -> bool {
        matches!(self.value, TermValue::Key(_))
    }
    pub fn is_index(&self) -> bool {
        matches!(self.value, TermValue::Index(_))
    }
    pub fn key(&self) -> Result<&str> {
        match &self.value {
            TermValue::Key(key) => Ok(key.as_ref()),
            TermValue::Index(index) => Err(TermError::NotAKey { term: index.to_string() }),
        }
    }
    pub fn index(&self) -> Result<i64> {
        match &self.value {
            TermValue::Index(index) => Ok(*index),
            TermValue::Key(key) => Err(TermError::NotAnIndex { term: key.to_string() }),
        }
    }
}

// Indices always sort before keys.
impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.value, &other.value) {
            (TermValue::Index(a), TermValue::Index(b)) => a.cmp(b),
            (TermValue::Key(a), TermValue::Key(b)) => a.cmp(b),
            (TermValue::Index(_), TermValue::Key(_)) => Ordering::Less,
            (TermValue::Key(_), TermValue::Index(_)) => Ordering::Greater,
        }
    }
}
impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.value {
            TermValue::Key(key) => write!(f, "{}", key),
            TermValue::Index(index) => write!(f, "{}", index),
        }
    }
}

// ------------- Comparison -------------
/// Compares two kept terms.
///
/// Kept terms are canonical, so the same allocation means the same value and
/// the value comparison can be skipped. Distinct allocations, such as terms
/// from two different keepers, fall back to comparing values.
pub fn compare(a: &Arc<Term>, b: &Arc<Term>) -> Ordering {
    if Arc::ptr_eq(a, b) {
        return Ordering::Equal;
    }
    Term::cmp(a, b)
}

/// Like [`compare`], for callers holding terms that may be absent.
pub fn try_compare(a: Option<&Arc<Term>>, b: Option<&Arc<Term>>) -> Result<Ordering> {
    match (a, b) {
        (Some(a), Some(b)) => Ok(compare(a, b)),
        _ => Err(TermError::NullTerm),
    }
}

/// Sorts terms into the deterministic output order.
pub fn sort_terms(terms: &mut [Arc<Term>]) {
    terms.sort_unstable_by(compare);
}
