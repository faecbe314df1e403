//! Recycler-tab state: suggestion batches, the selected project, and its
//! fabrication plan.
//!
//! Async results carry the request generation they were started with;
//! `apply_*`/`fail_*` drop anything whose generation is stale, so a reset or
//! back action can never be overwritten by a late response.

#[cfg(test)]
#[path = "workshop_test.rs"]
mod workshop_test;

use crate::gateway::types::{ProjectPlan, Suggestion};

/// Requested project difficulty; parameterizes the next suggestion request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Wording used inside the suggestion prompt.
    pub fn prompt_term(self) -> &'static str {
        match self {
            Self::Easy => "beginner-friendly",
            Self::Medium => "intermediate",
            Self::Hard => "advanced",
        }
    }

    /// Translation key for the segmented control label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Easy => "difficulty.easy",
            Self::Medium => "difficulty.medium",
            Self::Hard => "difficulty.hard",
        }
    }
}

/// Which recycler sub-view is on screen; derived from the populated fields,
/// never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecyclerView {
    Inventory,
    Suggestions,
    Plan,
}

#[derive(Debug, Clone, Default)]
pub struct WorkshopState {
    pub suggestions: Vec<Suggestion>,
    pub selected: Option<Suggestion>,
    pub plan: Option<ProjectPlan>,
    pub difficulty: Difficulty,
    pub loading: bool,
    /// Translation key for the current error banner, if any.
    pub error: Option<&'static str>,
    generation: u64,
}

impl WorkshopState {
    /// Exactly one sub-view is shown at a time.
    pub fn view(&self) -> RecyclerView {
        if self.selected.is_some() && self.plan.is_some() {
            RecyclerView::Plan
        } else if !self.suggestions.is_empty() {
            RecyclerView::Suggestions
        } else {
            RecyclerView::Inventory
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Raise an error banner outside the request lifecycle (e.g. the build
    /// carried no API key).
    pub fn set_error(&mut self, error_key: &'static str) {
        self.error = Some(error_key);
    }

    /// Start a suggestion request. No-op (returns `None`) when the inventory
    /// is empty. Clears prior suggestions, selection, and error, sets the
    /// loading flag, and hands back the generation the caller must present
    /// when the response arrives.
    pub fn begin_suggestion_request(&mut self, have_materials: bool) -> Option<u64> {
        if !have_materials {
            return None;
        }
        self.suggestions.clear();
        self.selected = None;
        self.plan = None;
        self.error = None;
        self.loading = true;
        Some(self.next_generation())
    }

    /// Install a suggestion batch. Returns `false` (untouched state, except
    /// that nothing clears loading for a stale caller) when the generation no
    /// longer matches.
    pub fn apply_suggestions(&mut self, generation: u64, suggestions: Vec<Suggestion>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.suggestions = suggestions;
        self.loading = false;
        true
    }

    pub fn fail_suggestions(&mut self, generation: u64, error_key: &'static str) -> bool {
        if generation != self.generation {
            return false;
        }
        self.error = Some(error_key);
        self.loading = false;
        true
    }

    /// Select a suggestion by id and start the plan request. No-op when the
    /// id is not in the current batch.
    pub fn begin_plan_request(&mut self, id: &str) -> Option<u64> {
        let suggestion = self.suggestions.iter().find(|s| s.id == id)?.clone();
        self.selected = Some(suggestion);
        self.plan = None;
        self.error = None;
        self.loading = true;
        Some(self.next_generation())
    }

    /// Install a fetched plan (already step-sorted by the gateway).
    pub fn apply_plan(&mut self, generation: u64, plan: ProjectPlan) -> bool {
        if generation != self.generation {
            return false;
        }
        self.plan = Some(plan);
        self.loading = false;
        true
    }

    /// Plan fetch failed: revert the selection so the suggestion list shows
    /// again, with an error banner.
    pub fn fail_plan(&mut self, generation: u64, error_key: &'static str) -> bool {
        if generation != self.generation {
            return false;
        }
        self.selected = None;
        self.error = Some(error_key);
        self.loading = false;
        true
    }

    /// Leave the plan view, keeping the suggestion batch. Any in-flight plan
    /// response is invalidated.
    pub fn back_to_suggestions(&mut self) {
        self.selected = None;
        self.plan = None;
        self.next_generation();
        self.loading = false;
    }

    /// Full return to the inventory view. Invalidates all in-flight requests.
    pub fn reset(&mut self) {
        self.suggestions.clear();
        self.selected = None;
        self.plan = None;
        self.error = None;
        self.loading = false;
        self.next_generation();
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
