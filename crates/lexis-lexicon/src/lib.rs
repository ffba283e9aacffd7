//! Lexicon-backed reference provider for the lexis word layer.
//!
//! [`LexiconServices`] implements [`lexis_core::LinguisticServices`] with
//! rule-based tokenization and per-language word tables, and
//! [`LocaleCatalog`] implements [`lexis_core::LocaleNames`] from embedded
//! display-name tables. English, French and German lexicons are compiled
//! in; more can be loaded from JSON files.
//!
//! # Architecture
//!
//! - [`lexicon`] -- word tables, JSON loading, embedded data
//! - [`tokenizer`] -- word segmentation with contraction and name joining
//! - [`speller`] -- lexicon speller and the spell check pipeline
//! - [`suggestion`] -- cost-budgeted suggestion generators and strategy
//! - [`identify`] -- language identification
//! - [`locale`] -- locale display-name catalog
//! - [`config`] -- provider configuration
//! - [`services`] -- the provider itself

pub mod config;
pub mod error;
pub mod identify;
pub mod lexicon;
pub mod locale;
pub mod services;
pub mod speller;
pub mod suggestion;
pub mod tokenizer;

pub use config::LexiconConfig;
pub use error::LexiconError;
pub use lexicon::{Entry, Lexicon};
pub use locale::LocaleCatalog;
pub use services::LexiconServices;
pub use speller::pipeline::SpellOptions;
