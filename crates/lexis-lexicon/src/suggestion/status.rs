// Suggestion bookkeeping for one misspelled word
//
// Generators share a single status: it holds the word being corrected, the
// candidates found so far and the work budget. Candidates are ranked by
// `base * (rank + 5)` where `rank` is how many were found before them.

use hashbrown::HashSet;

/// A ranked candidate. Lower priority is better.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub priority: i32,
}

/// Work budget in speller lookups / vocabulary comparisons.
///
/// The limit is soft while nothing has been found: a search that comes up
/// empty may spend up to twice the limit.
#[derive(Debug, Clone, Copy, Default)]
struct CostBudget {
    limit: usize,
    spent: usize,
}

impl CostBudget {
    fn exhausted(&self, found_any: bool) -> bool {
        let ceiling = if found_any { self.limit } else { self.limit.saturating_mul(2) };
        self.spent >= ceiling
    }
}

/// State shared by the generators while they search for candidates.
pub struct SuggestionStatus<'a> {
    word: &'a [char],
    capacity: usize,
    budget: CostBudget,
    found: Vec<Suggestion>,
    seen: HashSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    /// Status for `word`, keeping at most `capacity` candidates. The cost
    /// limit starts at zero; strategies set it with `set_max_cost`.
    pub fn new(word: &'a [char], capacity: usize) -> Self {
        Self {
            word,
            capacity,
            budget: CostBudget::default(),
            found: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.found.len() >= self.capacity
    }

    /// Whether generators should stop: no room left, or budget spent.
    pub fn should_abort(&self) -> bool {
        self.is_full() || self.budget.exhausted(!self.found.is_empty())
    }

    /// Record one unit of work.
    pub fn charge(&mut self) {
        self.budget.spent += 1;
    }

    pub fn set_max_cost(&mut self, max_cost: usize) {
        self.budget.limit = max_cost;
    }

    /// Record a candidate found with base priority `base`.
    ///
    /// The word itself, repeats and anything past capacity are dropped.
    pub fn add_suggestion(&mut self, candidate: String, base: i32) {
        if self.is_full() || candidate.chars().eq(self.word.iter().copied()) {
            return;
        }
        if !self.seen.insert(candidate.clone()) {
            return;
        }
        let rank = i32::try_from(self.found.len()).unwrap_or(i32::MAX);
        self.found.push(Suggestion {
            word: candidate,
            priority: base.saturating_mul(rank.saturating_add(5)),
        });
    }

    /// Order candidates best first; equal priorities keep discovery order.
    pub fn sort_suggestions(&mut self) {
        self.found.sort_by_key(|s| s.priority);
    }

    pub fn suggestion_count(&self) -> usize {
        self.found.len()
    }

    /// The word being corrected.
    pub fn word(&self) -> &'a [char] {
        self.word
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.found
    }

    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.found
    }
}
