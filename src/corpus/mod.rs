//! Synthetic route corpus generation.
//!
//! Produces a deterministic-shape, randomized-content set of route patterns
//! plus the concrete probe paths (first, last, unknown) exercised by the
//! standard scenarios. Patterns are kept as abstract segment lists; rendering
//! into a concrete placeholder syntax happens at the adapter boundary so no
//! single router's syntax is baked into the corpus.

pub mod error;
pub mod generator;
pub mod segment;

pub use error::CorpusError;
pub use generator::{Corpus, CorpusGenerator};
pub use segment::{Braced, ColonPrefixed, PlaceholderStyle, RouteSpec, Segment};
