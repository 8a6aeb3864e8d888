//! IDE features: high-level APIs for editor handlers.
//!
//! This module sits between the semantic layer and an editor server. Each
//! function corresponds to one editor request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: take an index in, return data out
//! 2. **No LSP types**: our own types, converted at the LSP boundary
//! 3. **Composable**: built on the [`Resolver`](crate::semantic::Resolver)
//!    queries
//!
//! The usual entry point is [`AnalysisHost`], which owns the index and hands
//! out [`Analysis`] snapshots.

mod analysis;
mod completion;
mod events;
mod goto;
mod symbols;
pub mod text_utils;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{
    CompletionContext, CompletionItem, CompletionKind, completion_context, completions,
};
pub use events::{ChangeEvent, ContentChange};
pub use goto::{GotoResult, GotoTarget, goto_definition};
pub use symbols::{SymbolInfo, SymbolKind, document_outline, document_symbols};
pub use text_utils::extract_word_at_cursor;
