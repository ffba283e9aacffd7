// Spelling suggestion generation

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::SuggestionGenerator;
pub use status::{Suggestion, SuggestionStatus};
pub use strategy::{default_typing_strategy, typing_strategy, SuggestionStrategy};
