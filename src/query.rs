use crate::models::Project;

// ---------------------------------------------------------------------------
// Query description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Client,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

pub const PAGE_SIZES: &[usize] = &[10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Everything the catalog views can vary. Filters compose by AND; empty
/// search and None filters are no-ops. `sort: None` preserves dataset order.
#[derive(Debug, Clone)]
pub struct ProjectQuery {
    pub search: String,
    pub year: Option<String>,
    pub category: Option<String>,
    pub sort: Option<SortKey>,
    pub direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            year: None,
            category: None,
            sort: Some(SortKey::Date),
            direction: SortDirection::Asc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProjectQuery {
    /// Header-click policy: picking the active key flips the direction,
    /// picking a new key selects it ascending. Either way the view goes
    /// back to the first page.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort == Some(key) {
            self.direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.sort = Some(key);
            self.direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    pub fn has_filters(&self) -> bool {
        !self.search.is_empty() || self.year.is_some() || self.category.is_some()
    }
}

// ---------------------------------------------------------------------------
// Filter + sort
// ---------------------------------------------------------------------------

/// Applies the filters and the sort, no pagination. Used directly by the
/// CSV export, and by `run_query` for everything else.
pub fn filter_and_sort<'a>(projects: &'a [Project], q: &ProjectQuery) -> Vec<&'a Project> {
    let needle = q.search.to_lowercase();
    let mut rows: Vec<&Project> = projects
        .iter()
        .filter(|p| {
            if !p.search_text().to_lowercase().contains(&needle) {
                return false;
            }
            if let Some(year) = &q.year {
                if !p.date.starts_with(year.as_str()) {
                    return false;
                }
            }
            if let Some(cat) = &q.category {
                if !p.categories.iter().any(|c| c == cat) {
                    return false;
                }
            }
            true
        })
        .collect();

    if let Some(key) = q.sort {
        // sort_by is stable, so equal keys keep dataset order in both
        // directions.
        rows.sort_by(|a, b| {
            let ord = match key {
                SortKey::Value => a.value_cop.cmp(&b.value_cop),
                SortKey::Date => a.date.cmp(&b.date),
                SortKey::Client => a.client.to_lowercase().cmp(&b.client.to_lowercase()),
            };
            match q.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
    rows
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

pub struct QueryPage<'a> {
    pub rows: Vec<&'a Project>,
    /// Matches before pagination.
    pub total: usize,
    pub total_pages: usize,
    /// 1-based, after clamping into [1, total_pages].
    pub page: usize,
    /// 0-based index of the first visible row.
    pub start: usize,
    /// Exclusive end index.
    pub end: usize,
}

pub fn run_query<'a>(projects: &'a [Project], q: &ProjectQuery) -> QueryPage<'a> {
    let rows = filter_and_sort(projects, q);
    let size = q.page_size.max(1);
    let total = rows.len();
    let total_pages = ((total + size - 1) / size).max(1);
    let page = q.page.clamp(1, total_pages);
    let start = (page - 1) * size;
    let end = total.min(start + size);
    QueryPage {
        rows: rows[start..end].to_vec(),
        total,
        total_pages,
        page,
        start,
        end,
    }
}
