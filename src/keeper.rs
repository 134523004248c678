//! The term keeper owns the canonical terms of one compile run.
//!
//! Every term is built once and then handed out as a shared `Arc<Term>`,
//! so repeated lookups of the same path segment skip validation entirely
//! and equal terms share one allocation. Two maps back this:
//! * text → term, holding every segment text seen so far, both as written
//!   and, for brace-quoted segments, as decoded;
//! * integer → term, holding the index terms, shared by text and integer
//!   construction.
//!
//! Entries are never removed. Insertion is insert-if-absent, so when two
//! threads race on the same unseen input both may validate it, but only one
//! term is kept and both callers receive it.

// used to share the canonical terms
use std::sync::Arc;

// used to pick our own hasher for the maps
use core::hash::BuildHasherDefault;
use std::fmt;

// concurrent maps, since compile workers share the keeper
use dashmap::DashMap;
use seahash::SeaHasher;
use tracing::{debug, trace};

// our own stuff that we need
use crate::classify::{check_index, classify, Classified};
use crate::element::Element;
use crate::error::{Result, TermError};
use crate::escape::{brace_quoted, HexEscape, Unescape};
use crate::settings::Settings;
use crate::term::Term;

pub type TermHasher = BuildHasherDefault<SeaHasher>;

pub struct TermKeeper {
    strings: DashMap<String, Arc<Term>, TermHasher>,
    indices: DashMap<i64, Arc<Term>, TermHasher>,
    unescape: Box<dyn Unescape>,
}

impl TermKeeper {
    /// Creates a keeper with default cache sizes and [`HexEscape`] decoding.
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }
    /// Creates a keeper with caches sized from `settings`.
    pub fn with_settings(settings: &Settings) -> Self {
        Self::with_unescape(settings, HexEscape)
    }
    /// Creates a keeper that decodes brace-quoted segments with `unescape`
    /// instead of [`HexEscape`].
    pub fn with_unescape<U: Unescape + 'static>(settings: &Settings, unescape: U) -> Self {
        debug!(
            string_capacity = settings.string_capacity,
            index_capacity = settings.index_capacity,
            "creating term keeper"
        );
        Self {
            strings: DashMap::with_capacity_and_hasher(settings.string_capacity, TermHasher::default()),
            indices: DashMap::with_capacity_and_hasher(settings.index_capacity, TermHasher::default()),
            unescape: Box::new(unescape),
        }
    }

    /// Creates a term from path segment text.
    ///
    /// Digit-only text becomes an index, other text a key. Text wrapped in
    /// braces is decoded first, which lets keys carry characters the key
    /// grammar does not allow.
    pub fn create(&self, raw: &str) -> Result<Arc<Term>> {
        if let Some(kept) = self.lookup(raw) {
            return Ok(kept);
        }
        let kept = match brace_quoted(raw) {
            Some(quoted) => {
                let decoded = self.unescape.decode(quoted);
                // quoted text as written shares the map, so quoted output
                // skips the lookup and fails the key grammar instead
                let kept = if brace_quoted(&decoded).is_none() {
                    self.lookup(&decoded)
                } else {
                    None
                };
                match kept {
                    Some(kept) => kept,
                    None => self.classify_and_keep(&decoded)?,
                }
            }
            None => self.classify_and_keep(raw)?,
        };
        Ok(self.alias(raw, kept))
    }

    /// Creates an index term, shared with indices created from text.
    pub fn create_index(&self, index: i64) -> Result<Arc<Term>> {
        if let Some(kept) = self.indices.get(&index) {
            return Ok(Arc::clone(kept.value()));
        }
        // nothing enters the map without passing this check
        check_index(index).inspect_err(|e| debug!(index, error = %e, "rejected index"))?;
        trace!(index, "keeping new index term");
        let kept = self
            .indices
            .entry(index)
            .or_insert_with(|| Arc::new(Term::new_index(index)));
        Ok(Arc::clone(kept.value()))
    }

    /// Creates a term from an evaluated element; only strings and longs qualify.
    pub fn create_element(&self, element: &Element) -> Result<Arc<Term>> {
        match element {
            Element::String(s) => self.create(s),
            Element::Long(l) => self.create_index(*l),
            Element::Double(_) | Element::Boolean(_) | Element::Null | Element::Undef => {
                Err(TermError::InvalidElementForIndex {
                    type_name: element.type_name().to_string(),
                })
            }
        }
    }

    /// Like [`TermKeeper::create`], for segment text that may be absent.
    pub fn create_nullable(&self, raw: Option<&str>) -> Result<Arc<Term>> {
        match raw {
            Some(raw) => self.create(raw),
            None => Err(TermError::NullTerm),
        }
    }

    /// Number of texts kept, counting quoted and decoded forms separately.
    pub fn string_len(&self) -> usize {
        self.strings.len()
    }
    /// Number of distinct index terms kept.
    pub fn index_len(&self) -> usize {
        self.indices.len()
    }

    fn lookup(&self, text: &str) -> Option<Arc<Term>> {
        self.strings.get(text).map(|kept| Arc::clone(kept.value()))
    }

    fn classify_and_keep(&self, text: &str) -> Result<Arc<Term>> {
        let classified =
            classify(text).inspect_err(|e| debug!(term = text, error = %e, "rejected term"))?;
        match classified {
            Classified::Index(index) => self.create_index(index),
            Classified::Key => {
                trace!(key = text, "keeping new key term");
                Ok(self.alias(text, Arc::new(Term::new_key(text))))
            }
        }
    }

    // Returns whichever term ends up kept under the text.
    fn alias(&self, text: &str, term: Arc<Term>) -> Arc<Term> {
        let kept = self.strings.entry(text.to_owned()).or_insert(term);
        Arc::clone(kept.value())
    }
}

impl Default for TermKeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TermKeeper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TermKeeper")
            .field("strings", &self.strings.len())
            .field("indices", &self.indices.len())
            .finish()
    }
}
