//! Weighted lexical autocomplete: prefix completion, substring containment,
//! and frequency ranking over an in-memory dictionary.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────────┐     ┌──────────────┐
//! │   trie.rs    │     │  substring.rs   │     │  ranker.rs   │
//! │ (PrefixTrie, │     │ (SubstringIndex,│     │ (rank: merge,│
//! │  complete,   │     │  matching)      │     │  dedupe, cap)│
//! │  weight_of)  │     │                 │     │              │
//! └──────┬───────┘     └────────┬────────┘     └──────┬───────┘
//!        │                      │                     │
//!        ▼                      ▼                     ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         index.rs                            │
//! │    (AutocompleteIndex - insert fan-in, query fan-out)       │
//! └─────────────────────────────────────────────────────────────┘
//!        ▲                                            │
//!        │ insert(term, weight)                       │ Vec<Suggestion>
//! ┌──────┴───────┐                     ┌──────────────▼──────────────┐
//! │  loader.rs   │                     │  server.rs / repl.rs / CLI  │
//! └──────────────┘                     └─────────────────────────────┘
//! ```
//!
//! The index is built once by sequential inserts, then queried read-only.
//! A query fans out to prefix completion and substring containment, the
//! ranker merges both candidate sets (prefix wins membership ties), orders
//! by (weight descending, term ascending), and truncates to the cap.
//!
//! # Usage
//!
//! ```
//! use typeahead::AutocompleteIndex;
//!
//! let mut index = AutocompleteIndex::new();
//! index.insert("cat", 5);
//! index.insert("car", 3);
//! index.insert("banana", 4);
//!
//! assert_eq!(index.suggest("ca"), vec!["cat", "car"]);
//! assert_eq!(index.suggest("nan"), vec!["banana"]);
//! ```

// Module declarations
mod index;
mod loader;
mod ranker;
pub mod repl;
pub mod server;
mod substring;
pub mod testing;
mod trie;
mod types;
mod utils;

// Re-exports for public API
pub use index::AutocompleteIndex;
pub use loader::{load_dictionary, load_records, LoadError, LoadStats};
pub use ranker::{rank, DEFAULT_MAX_RESULTS};
pub use server::{ServerConfig, SuggestServer};
pub use substring::SubstringIndex;
pub use trie::PrefixTrie;
pub use types::{MatchSource, Suggestion};
pub use utils::normalize;
