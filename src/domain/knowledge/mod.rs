//! Knowledge base: services, tax rules, FAQ and coverage, with keyword,
//! synonym and fuzzy search.

mod faq;
mod item;
mod knowledge_base;
mod synonyms;

pub use faq::{FaqEntry, COVERAGE_REGIONS, FAQ_ENTRIES};
pub use item::{ItemMetadata, KnowledgeItem, KnowledgeKind};
pub use knowledge_base::{KnowledgeBase, SearchHit};
pub use synonyms::{fuzzy_match, synonyms_for, SYNONYMS};
