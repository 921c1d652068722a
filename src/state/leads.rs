// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lead views: the capped bulk selection and the filterable lead board.

use crate::models::{Lead, LeadPage, Pagination};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Result of toggling one lead in the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Added,
    Removed,
    /// Already unlocked; nothing to buy.
    AlreadyAccessed,
    /// Cap reached; the id was not added.
    LimitReached,
}

/// Leads picked for one bulk unlock, at most `limit` of them.
#[derive(Debug, Clone)]
pub struct LeadSelection {
    limit: usize,
    ids: Vec<String>,
}

impl LeadSelection {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ids: Vec::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, lead_id: &str) -> bool {
        self.ids.iter().any(|id| id == lead_id)
    }

    /// One token per lead.
    pub fn token_cost(&self) -> usize {
        self.ids.len()
    }

    pub fn limit_message(&self) -> String {
        format!("Maximum {} leads can be selected", self.limit)
    }

    pub fn toggle(&mut self, lead: &Lead) -> SelectOutcome {
        self.toggle_id(&lead.id, lead.is_accessed_by_user)
    }

    pub fn toggle_id(&mut self, lead_id: &str, accessed: bool) -> SelectOutcome {
        if accessed {
            return SelectOutcome::AlreadyAccessed;
        }
        if let Some(pos) = self.ids.iter().position(|id| id == lead_id) {
            self.ids.remove(pos);
            return SelectOutcome::Removed;
        }
        if self.ids.len() >= self.limit {
            return SelectOutcome::LimitReached;
        }
        self.ids.push(lead_id.to_string());
        SelectOutcome::Added
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Which list the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeadTab {
    #[default]
    All,
    Accessed,
}

/// Client-side filter over the loaded page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    /// Case-insensitive substring of the lead name
    pub search: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub category: Option<String>,
    /// Inclusive, compared by UTC calendar day
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl LeadFilter {
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() && !lead.name.to_lowercase().contains(&search) {
            return false;
        }
        if !facet_matches(&self.city, &lead.city)
            || !facet_matches(&self.country, &lead.country)
            || !facet_matches(&self.category, &lead.category)
        {
            return false;
        }

        let day = lead.created_at.date_naive();
        self.date_from.map_or(true, |from| day >= from) && self.date_to.map_or(true, |to| day <= to)
    }
}

/// Exact facet match. An unset or empty wanted value matches anything.
pub(crate) fn facet_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted.as_deref().filter(|w| !w.is_empty()) {
        None => true,
        Some(w) => actual.as_deref() == Some(w),
    }
}

/// Distinct, sorted, non-empty values of one lead field.
pub fn facet<'a, F>(leads: &'a [Lead], field: F) -> Vec<String>
where
    F: Fn(&'a Lead) -> Option<&'a str>,
{
    leads
        .iter()
        .filter_map(field)
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The user's lead board: both tabs, their pages and the active filter.
#[derive(Debug, Clone, Default)]
pub struct LeadBoard {
    pub tab: LeadTab,
    pub filter: LeadFilter,
    all: LeadPage,
    accessed: LeadPage,
    all_page: u32,
    accessed_page: u32,
}

impl LeadBoard {
    pub fn new() -> Self {
        Self {
            all_page: 1,
            accessed_page: 1,
            ..Default::default()
        }
    }

    pub fn set_all(&mut self, page: u32, leads: LeadPage) {
        self.all_page = page;
        self.all = leads;
    }

    pub fn set_accessed(&mut self, page: u32, leads: LeadPage) {
        self.accessed_page = page;
        self.accessed = leads;
    }

    pub fn page(&self, tab: LeadTab) -> u32 {
        match tab {
            LeadTab::All => self.all_page,
            LeadTab::Accessed => self.accessed_page,
        }
    }

    pub fn pagination(&self, tab: LeadTab) -> &Pagination {
        match tab {
            LeadTab::All => &self.all.pagination,
            LeadTab::Accessed => &self.accessed.pagination,
        }
    }

    pub fn leads(&self, tab: LeadTab) -> &[Lead] {
        match tab {
            LeadTab::All => &self.all.leads,
            LeadTab::Accessed => &self.accessed.leads,
        }
    }

    /// Leads on the current tab.
    pub fn current(&self) -> &[Lead] {
        self.leads(self.tab)
    }

    /// Current tab after the filter.
    pub fn filtered(&self) -> Vec<&Lead> {
        self.current()
            .iter()
            .filter(|l| self.filter.matches(l))
            .collect()
    }

    /// Filtered leads on the "all" tab the user has not unlocked yet.
    pub fn locked_leads(&self) -> Vec<&Lead> {
        if self.tab != LeadTab::All {
            return Vec::new();
        }
        self.filtered()
            .into_iter()
            .filter(|l| !l.is_accessed_by_user)
            .collect()
    }

    pub fn cities(&self) -> Vec<String> {
        facet(self.current(), |l| l.city.as_deref())
    }

    pub fn countries(&self) -> Vec<String> {
        facet(self.current(), |l| l.country.as_deref())
    }

    pub fn categories(&self) -> Vec<String> {
        facet(self.current(), |l| l.category.as_deref())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    pub(crate) fn lead(id: &str, name: &str, email: &str) -> Lead {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": name,
            "email": email,
            "createdAt": "2026-03-10T12:00:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn test_selection_cap() {
        let mut sel = LeadSelection::new(2);
        assert_eq!(sel.toggle_id("a", false), SelectOutcome::Added);
        assert_eq!(sel.toggle_id("b", false), SelectOutcome::Added);
        assert_eq!(sel.toggle_id("c", false), SelectOutcome::LimitReached);
        assert_eq!(sel.ids(), ["a", "b"]);
        assert_eq!(sel.limit_message(), "Maximum 2 leads can be selected");
    }

    #[test]
    fn test_selection_toggle_and_accessed() {
        let mut sel = LeadSelection::new(10);
        assert_eq!(sel.toggle_id("x", true), SelectOutcome::AlreadyAccessed);
        assert!(sel.is_empty());

        sel.toggle_id("a", false);
        assert_eq!(sel.toggle_id("a", false), SelectOutcome::Removed);
        assert_eq!(sel.token_cost(), 0);
    }

    #[test]
    fn test_deselect_at_cap_frees_slot() {
        let mut sel = LeadSelection::new(1);
        sel.toggle_id("a", false);
        assert_eq!(sel.toggle_id("a", false), SelectOutcome::Removed);
        assert_eq!(sel.toggle_id("b", false), SelectOutcome::Added);
    }

    #[test]
    fn test_filter_date_range_inclusive_by_day() {
        let mut l = lead("1", "Acme", "a@x.com");
        l.created_at = Utc.with_ymd_and_hms(2026, 3, 10, 23, 59, 0).unwrap();

        let day = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let filter = LeadFilter {
            date_from: Some(day),
            date_to: Some(day),
            ..Default::default()
        };
        assert!(filter.matches(&l));

        let filter = LeadFilter {
            date_from: NaiveDate::from_ymd_opt(2026, 3, 11),
            ..Default::default()
        };
        assert!(!filter.matches(&l));
    }

    #[test]
    fn test_filter_search_and_facets() {
        let mut l = lead("1", "Acme Dental", "a@x.com");
        l.city = Some("Pune".to_string());

        let filter = LeadFilter {
            search: "dental".to_string(),
            city: Some("Pune".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&l));

        let filter = LeadFilter {
            city: Some("Delhi".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&l));
    }

    #[test]
    fn test_facets_distinct_sorted_non_empty() {
        let mut a = lead("1", "A", "a@x.com");
        let mut b = lead("2", "B", "b@x.com");
        let mut c = lead("3", "C", "c@x.com");
        a.city = Some("Pune".to_string());
        b.city = Some("Delhi".to_string());
        c.city = Some(String::new());
        let mut d = a.clone();
        d.id = "4".to_string();

        let mut board = LeadBoard::new();
        board.set_all(
            1,
            LeadPage {
                leads: vec![a, b, c, d],
                pagination: Pagination::default(),
            },
        );
        assert_eq!(board.cities(), vec!["Delhi", "Pune"]);
    }

    #[test]
    fn test_locked_leads_only_on_all_tab() {
        let mut open = lead("1", "A", "a@x.com");
        open.is_accessed_by_user = true;
        let locked = lead("2", "B", "b@x.com");

        let mut board = LeadBoard::new();
        board.set_all(
            1,
            LeadPage {
                leads: vec![open, locked],
                pagination: Pagination::default(),
            },
        );
        let ids: Vec<&str> = board.locked_leads().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        board.tab = LeadTab::Accessed;
        assert!(board.locked_leads().is_empty());
    }
}
