//! Market-research heuristics for DeepAds.
//!
//! Mines repeated keywords from the product description and voice-of-customer
//! text, and buckets VOC lines into pains, desires, and objections using fixed
//! trigger phrases. Everything here is pure and deterministic.

pub mod analyze;
pub mod classifier;
pub mod tokenize;

pub use analyze::analyze_market_text;
pub use classifier::{classify_lines, ClassifiedLines};
pub use tokenize::{tokenize, top_keywords, MAX_KEYWORDS};
