//! Duplicate-email detection and the admin lead table filter.

use super::leads::facet_matches;
use crate::models::Lead;
use std::collections::{BTreeSet, HashMap};

/// Ids of every lead whose email (exact match, non-empty) appears on more
/// than one lead. Independent of input order.
pub fn duplicate_ids(leads: &[Lead]) -> BTreeSet<String> {
    let mut by_email: HashMap<&str, Vec<&str>> = HashMap::new();
    for lead in leads.iter().filter(|l| !l.email.is_empty()) {
        by_email.entry(&lead.email).or_default().push(&lead.id);
    }

    by_email
        .into_values()
        .filter(|ids| ids.len() > 1)
        .flatten()
        .map(str::to_string)
        .collect()
}

/// Filter for the admin lead table.
#[derive(Debug, Clone, Default)]
pub struct AdminLeadFilter {
    /// Case-insensitive substring of name or email
    pub search: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub category: Option<String>,
    pub duplicates_only: bool,
}

impl AdminLeadFilter {
    /// Apply the filter. `duplicates` comes from [`duplicate_ids`] over the
    /// same page.
    pub fn apply<'a>(&self, leads: &'a [Lead], duplicates: &BTreeSet<String>) -> Vec<&'a Lead> {
        let search = self.search.trim().to_lowercase();

        leads
            .iter()
            .filter(|lead| {
                search.is_empty()
                    || lead.name.to_lowercase().contains(&search)
                    || lead.email.to_lowercase().contains(&search)
            })
            .filter(|lead| facet_matches(&self.city, &lead.city))
            .filter(|lead| facet_matches(&self.country, &lead.country))
            .filter(|lead| facet_matches(&self.category, &lead.category))
            .filter(|lead| !self.duplicates_only || duplicates.contains(&lead.id))
            .collect()
    }
}
