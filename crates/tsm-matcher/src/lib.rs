//! Structural type-shape matcher.
//!
//! Given the inferred shape of an untyped object literal and a catalog of
//! declared interfaces/type aliases, compute which declared types the literal
//! could be annotated with, how well each fits, and why.
//!
//! - **Normalizer** (`normalize`): type syntax → canonical type strings
//! - **Inline parser** (`inline_type`): `{ a: T; b?: U }` → property list
//! - **Catalog** (`catalog`, `store`): declared types per file, snapshots
//! - **Compatibility rule** (`compat`): textual type compatibility
//! - **Scorer** (`scorer`): weighted, recursive property matching
//! - **Ranker** (`ranker`): score ordering with external tie-breaking
//!
//! Scoring is total: every input produces a score in `[0, 1]` and nothing in
//! the scoring path returns an error.
pub mod catalog;
pub mod compat;
pub mod inline_type;
mod matcher;
pub mod normalize;
pub mod options;
pub mod ranker;
pub mod scorer;
pub mod shape;
pub mod store;
pub mod types;

pub use catalog::{ResolutionOrder, TypeCatalog, bare_reference, strip_type_arguments};
pub use compat::is_compatible;
pub use inline_type::parse_inline_type;
pub use matcher::{TypeMatcher, score_all};
pub use normalize::{KeywordKind, MemberNode, TypeNode, declared_properties, normalize_type};
pub use options::MatcherOptions;
pub use ranker::{MatchRanker, rank_matches};
pub use scorer::{CompatibilityScorer, PropertyCoverage, compare_properties};
pub use shape::{LiteralValue, infer_shape};
pub use store::{CatalogStore, DeclarationSource, RefreshOutcome, RefreshStats};
pub use types::{CompatibilityMatch, DeclaredType, InferredShape, NestedMatch, PropertySignature};
