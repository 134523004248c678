//! Panterm – path terms for a configuration language compiler.
//!
//! Every value in a compiled profile lives in a tree of nested dictionaries
//! and lists, and every access into that tree goes through a path made of
//! *terms*:
//! * a key, naming an entry of a dictionary (`foo.bar+baz`, `_x`);
//! * an index, naming a position in a list (`0`, `-5`), within the signed
//!   32-bit range.
//!
//! Terms are created by a [`keeper::TermKeeper`], which validates segment
//! text once and from then on hands out the same shared `Arc<Term>` for the
//! same input. The keeper is an explicit value with the lifetime of a compile
//! run; share it between worker threads by reference or through an `Arc`.
//!
//! ## Modules
//! * [`classify`] – the index and key grammars.
//! * [`term`] – the [`term::Term`] type and its total order.
//! * [`keeper`] – canonical construction from text, integers and elements.
//! * [`element`] – the primitive values terms may be created from.
//! * [`escape`] – decoding of brace-quoted segments such as `{a b}`.
//! * [`settings`] – cache sizing, read through the `config` crate.
//!
//! ## Quick Start
//! ```
//! use panterm::keeper::TermKeeper;
//! use panterm::term::{compare, sort_terms};
//! let keeper = TermKeeper::new();
//! let mut terms = vec![
//!     keeper.create("name").unwrap(),
//!     keeper.create("2").unwrap(),
//!     keeper.create_index(0).unwrap(),
//! ];
//! sort_terms(&mut terms);
//! assert_eq!(terms[0].index().unwrap(), 0);
//! assert_eq!(terms[2].key().unwrap(), "name");
//! assert!(compare(&terms[1], &keeper.create("2").unwrap()).is_eq());
//! ```

pub mod classify;
pub mod element;
pub mod error;
pub mod escape;
pub mod keeper;
pub mod settings;
pub mod term;

pub use error::{Result, TermError};
pub use keeper::TermKeeper;
pub use term::Term;
