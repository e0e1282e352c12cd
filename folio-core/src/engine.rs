use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::ContentRecord;

pub const DEFAULT_REVEAL: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Author,
    #[default]
    Views,
}

/// Exactly one transform is active at a time. Every variant is recomputed
/// from the full record set, so switching modes never narrows a previous view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    AllSorted(SortKey),
    Filtered(String),
    Searched(String),
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::AllSorted(SortKey::Views)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCap {
    Limited(usize),
    Unlimited,
}

impl Default for RevealCap {
    fn default() -> Self {
        RevealCap::Limited(DEFAULT_REVEAL)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub records: Vec<ContentRecord>,
    pub reveal: RevealCap,
}

impl ViewState {
    pub fn visible(&self) -> &[ContentRecord] {
        apply_reveal_cap(&self.records, self.reveal)
    }

    /// Whether a "load more" action would reveal anything.
    pub fn has_hidden(&self) -> bool {
        self.visible().len() < self.records.len()
    }
}

/// Returns the first `cap` records, or all of them when the cap is lifted.
pub fn apply_reveal_cap<T>(records: &[T], cap: RevealCap) -> &[T] {
    match cap {
        RevealCap::Limited(n) => &records[..n.min(records.len())],
        RevealCap::Unlimited => records,
    }
}

thread_local! {
    static ROOT_COLLATOR: Collator =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .expect("root collation data is compiled in");
}

/// Root-locale Unicode collation at default (tertiary) strength: accents and
/// case are secondary to the base letters, lowercase sorts before uppercase,
/// and Thai prevowels are ordered after the consonant they precede.
pub fn collate(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| collator.compare(a, b))
}

#[derive(Debug, Clone)]
pub struct ContentListEngine {
    // Load order; lookups and the category list read from here.
    records: Vec<ContentRecord>,
    // The full set in the order left by the most recent sort.
    current: Vec<ContentRecord>,
    initial_reveal: RevealCap,
    view: ViewState,
}

impl Default for ContentListEngine {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL)
    }
}

impl ContentListEngine {
    pub fn new(initial_reveal: usize) -> Self {
        let initial_reveal = RevealCap::Limited(initial_reveal);
        Self {
            records: Vec::new(),
            current: Vec::new(),
            initial_reveal,
            view: ViewState {
                reveal: initial_reveal,
                ..ViewState::default()
            },
        }
    }

    /// Replaces the authoritative set and resets to the default view
    /// (all records, most viewed first).
    pub fn load(&mut self, records: Vec<ContentRecord>) {
        debug!(count = records.len(), "loading content records");
        self.current = records.clone();
        self.records = records;
        self.apply(ViewMode::default());
    }

    pub fn sort_by_author(&mut self) -> &[ContentRecord] {
        &self.apply(ViewMode::AllSorted(SortKey::Author)).records
    }

    pub fn sort_by_views(&mut self) -> &[ContentRecord] {
        &self.apply(ViewMode::AllSorted(SortKey::Views)).records
    }

    pub fn filter_by_category(&mut self, category: &str) -> &[ContentRecord] {
        &self.apply(ViewMode::Filtered(category.to_owned())).records
    }

    pub fn search(&mut self, query: &str) -> &[ContentRecord] {
        &self.apply(ViewMode::Searched(query.to_owned())).records
    }

    /// Recomputes the view for `mode` from the full set and resets the reveal cap.
    pub fn apply(&mut self, mode: ViewMode) -> &ViewState {
        let (mode, records) = match mode {
            ViewMode::AllSorted(key) => {
                self.sort_current(key);
                (ViewMode::AllSorted(key), self.current.clone())
            }
            ViewMode::Filtered(category) => {
                let records = self
                    .current
                    .iter()
                    .filter(|r| r.category == category)
                    .cloned()
                    .collect();
                (ViewMode::Filtered(category), records)
            }
            ViewMode::Searched(query) => {
                let needle = query.trim().to_lowercase();
                let records = self
                    .current
                    .iter()
                    .filter(|r| r.matches(&needle))
                    .cloned()
                    .collect();
                (ViewMode::Searched(needle), records)
            }
        };
        debug!(?mode, matched = records.len(), "view recomputed");
        self.view = ViewState {
            mode,
            records,
            reveal: self.initial_reveal,
        };
        &self.view
    }

    /// Lifts the reveal cap for the current view.
    pub fn load_more(&mut self) -> &[ContentRecord] {
        self.view.reveal = RevealCap::Unlimited;
        &self.view.records
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn visible(&self) -> &[ContentRecord] {
        self.view.visible()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in load order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category) {
                seen.push(record.category.clone());
            }
        }
        seen
    }

    pub fn find_by_id(&self, id: u64) -> Option<&ContentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Detail lookup from a raw `?id=` query parameter.
    pub fn find_by_param(&self, raw: &str) -> Option<&ContentRecord> {
        let id = raw.trim().parse::<u64>().ok()?;
        self.find_by_id(id)
    }

    // slice::sort_by is stable, so ties keep the order of the previous sort.
    fn sort_current(&mut self, key: SortKey) {
        match key {
            SortKey::Author => self.current.sort_by(|a, b| collate(&a.author, &b.author)),
            SortKey::Views => self.current.sort_by(|a, b| b.views.cmp(&a.views)),
        }
    }
}
