use std::collections::HashSet;

use log::{debug, warn};

use crate::config::MAX_COMPARISON;
use super::offering::{FilterTag, OfferingRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonToggle {
    Added,
    Removed,
    /// Selection already holds `MAX_COMPARISON` programs; nothing changed.
    Full,
    Unknown,
}

/// Static list of programs plus the current filter, search and compare
/// selection. The visible list is recomputed on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterableCatalog {
    records: Vec<OfferingRecord>,
    active_tag: FilterTag,
    search_term: String,
    visible: Vec<usize>,
    comparison: Vec<&'static str>,
}

impl FilterableCatalog {
    pub fn new(records: Vec<OfferingRecord>) -> Self {
        let mut seen = HashSet::new();
        let records: Vec<OfferingRecord> = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id);
                if !fresh {
                    warn!("Duplicate program id '{}' ignored", record.id);
                }
                fresh
            })
            .collect();

        let mut catalog = Self {
            visible: (0..records.len()).collect(),
            records,
            active_tag: FilterTag::All,
            search_term: String::new(),
            comparison: Vec::new(),
        };
        catalog.recompute();
        catalog
    }

    pub fn records(&self) -> &[OfferingRecord] {
        &self.records
    }

    pub fn record(&self, id: &str) -> Option<&OfferingRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn active_tag(&self) -> FilterTag {
        self.active_tag
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_filter_tag(&mut self, tag: FilterTag) {
        self.active_tag = tag;
        self.recompute();
    }

    pub fn set_filter_label(&mut self, label: &str) {
        self.set_filter_tag(FilterTag::from_label(label));
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.trim().to_lowercase();
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        self.active_tag = FilterTag::All;
        self.search_term.clear();
        self.recompute();
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &OfferingRecord> + '_ {
        self.visible.iter().map(move |&i| &self.records[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    fn recompute(&mut self) {
        let tag = self.active_tag;
        let term = self.search_term.as_str();
        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.has_tag(tag) && (term.is_empty() || r.matches_lowercase(term)))
            .map(|(i, _)| i)
            .collect();
        debug!(
            "{} of {} programs visible (tag={}, search='{}')",
            self.visible.len(),
            self.records.len(),
            tag.as_str(),
            term
        );
    }

    pub fn toggle_comparison(&mut self, id: &str) -> ComparisonToggle {
        if let Some(pos) = self.comparison.iter().position(|selected| *selected == id) {
            self.comparison.remove(pos);
            return ComparisonToggle::Removed;
        }
        let Some(record) = self.record(id) else {
            return ComparisonToggle::Unknown;
        };
        if self.comparison.len() >= MAX_COMPARISON {
            return ComparisonToggle::Full;
        }
        let id = record.id;
        self.comparison.push(id);
        ComparisonToggle::Added
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.comparison.iter().any(|selected| *selected == id)
    }

    pub fn comparison_len(&self) -> usize {
        self.comparison.len()
    }

    /// Selected programs in the order they were picked.
    pub fn comparison_records(&self) -> Vec<&OfferingRecord> {
        self.comparison
            .iter()
            .filter_map(|id| self.record(id))
            .collect()
    }

    pub fn clear_comparison(&mut self) {
        self.comparison.clear();
    }
}
