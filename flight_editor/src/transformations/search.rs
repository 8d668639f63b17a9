use log::debug;

use crate::core::domain::FlightRecord;
use crate::core::fields::SearchField;
use crate::db::store::{FlightStore, RecordId};

/// Ordered snapshot of the records that matched a query.
///
/// Holds handles, not copies. The view does not follow later store
/// mutations: a handle whose record was deleted since resolves to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub field: SearchField,
    pub query: String,
    ids: Vec<RecordId>,
}

impl SearchView {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    /// Resolve every handle against `store`, in match order.
    pub fn records<'a>(
        &'a self,
        store: &'a FlightStore,
    ) -> impl Iterator<Item = Option<&'a FlightRecord>> + 'a {
        self.ids.iter().map(move |id| store.get(*id))
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was empty or whitespace only; nothing was scanned.
    EmptyQuery,
    /// The query was scanned against every record and nothing matched.
    NoMatch,
    /// At least one record matched.
    Matches(SearchView),
}

impl SearchOutcome {
    pub fn match_count(&self) -> usize {
        match self {
            SearchOutcome::Matches(view) => view.len(),
            SearchOutcome::EmptyQuery | SearchOutcome::NoMatch => 0,
        }
    }

    pub fn view(&self) -> Option<&SearchView> {
        match self {
            SearchOutcome::Matches(view) => Some(view),
            _ => None,
        }
    }
}

/// Collect every record whose `field` contains `query` as a contiguous,
/// case-sensitive substring, in store order.
///
/// A non-blank query is used verbatim, spaces included, since flight
/// numbers contain one.
pub fn search_store(store: &FlightStore, field: SearchField, query: &str) -> SearchOutcome {
    if query.trim().is_empty() {
        return SearchOutcome::EmptyQuery;
    }

    let extract = field.extractor();
    let ids: Vec<RecordId> = store
        .entries()
        .filter(|(_, record)| extract(record).contains(query))
        .map(|(id, _)| id)
        .collect();

    debug!("Search {} for {:?}: {} matches", field, query, ids.len());

    if ids.is_empty() {
        SearchOutcome::NoMatch
    } else {
        SearchOutcome::Matches(SearchView {
            field,
            query: query.to_string(),
            ids,
        })
    }
}
