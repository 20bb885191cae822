//! Filter, sort, and paginate pipeline for list views.
//!
//! [`select`] is a pure function over a slice of work items. [`ListView`]
//! wraps it with the page-reset rule: any change to the filter, sort, or page
//! size sends the view back to page 1, while moving between pages never
//! changes which items pass the filter.

use crate::config::BoardConfig;
use crate::tracker::domain::{MemberId, Priority, ProjectId, Scope, Status, WorkItem};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Predicate over work items. Every field must match (AND semantics); a
/// field set to [`Scope::All`] or a missing query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Owning project.
    pub project: Scope<ProjectId>,
    /// Logical status.
    pub status: Scope<Status>,
    /// Priority. `Only` never matches an item without a priority.
    pub priority: Scope<Priority>,
    /// Assignee. `Only` never matches an unassigned item.
    pub assignee: Scope<MemberId>,
    /// Case-insensitive free-text query.
    pub query: Option<String>,
}

impl FilterCriteria {
    /// Creates criteria that match every item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one project.
    #[must_use]
    pub fn with_project(mut self, project: ProjectId) -> Self {
        self.project = Scope::Only(project);
        self
    }

    /// Restricts to one status.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Scope::Only(status);
        self
    }

    /// Restricts to one priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Scope::Only(priority);
        self
    }

    /// Restricts to one assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: MemberId) -> Self {
        self.assignee = Scope::Only(assignee);
        self
    }

    /// Sets the free-text query. A blank query is no query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = normalize_query(&query.into());
        self
    }

    /// Returns whether the criteria match every item.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.project.is_all()
            && self.status.is_all()
            && self.priority.is_all()
            && self.assignee.is_all()
            && self.query.is_none()
    }

    /// Returns whether `item` passes every field.
    #[must_use]
    pub fn matches(&self, item: &WorkItem) -> bool {
        self.project.matches(item.project_id())
            && self.status.matches(&item.status())
            && self.priority.matches_optional(item.priority().as_ref())
            && self
                .assignee
                .matches_optional(item.assignee().map(|member| &member.id))
            && self
                .query
                .as_deref()
                .is_none_or(|query| matches_text(item, query))
    }
}

fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Matches title, description, `#number`, and opener name.
fn matches_text(item: &WorkItem, query: &str) -> bool {
    let needle = query.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(item.title())
        || item.description().is_some_and(contains)
        || item
            .number()
            .is_some_and(|number| format!("#{number}").contains(&needle))
        || item.opener().is_some_and(|opener| contains(&opener.name))
}

/// Field to order a list by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Store insertion order.
    #[default]
    StoreOrder,
    /// Title, case-insensitive.
    Title,
    /// Priority; items without one sort last.
    Priority,
    /// Logical status.
    Status,
    /// Recorded time spent.
    TimeSpent,
    /// Display number; items without one sort last.
    Number,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Ordering rule. The sort is stable, so ties keep store order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    /// Field to order by.
    pub key: SortKey,
    /// Direction.
    pub direction: SortDirection,
}

impl Sort {
    /// Creates a rule.
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Creates an ascending rule.
    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Creates a descending rule.
    #[must_use]
    pub const fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    fn compare(self, left: &WorkItem, right: &WorkItem) -> Ordering {
        match self.key {
            SortKey::StoreOrder => Ordering::Equal,
            SortKey::Title => self.direction.apply(
                left.title()
                    .to_lowercase()
                    .cmp(&right.title().to_lowercase()),
            ),
            SortKey::Priority => {
                compare_missing_last(left.priority(), right.priority(), self.direction)
            }
            SortKey::Status => self.direction.apply(left.status().cmp(&right.status())),
            SortKey::TimeSpent => self
                .direction
                .apply(left.time_spent().cmp(&right.time_spent())),
            SortKey::Number => {
                compare_missing_last(left.number(), right.number(), self.direction)
            }
        }
    }
}

/// Orders present values by `direction`; missing values always trail.
fn compare_missing_last<T: Ord>(
    left: Option<T>,
    right: Option<T>,
    direction: SortDirection,
) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// One page of a filtered, sorted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// Items on this page; at most `page_size` of them.
    pub items: Vec<&'a WorkItem>,
    /// 1-indexed page number that was requested.
    pub page: usize,
    /// Page size used.
    pub page_size: usize,
    /// Number of items that passed the filter.
    pub total_items: usize,
    /// `max(1, ceil(total_items / page_size))`.
    pub total_pages: usize,
}

impl Page<'_> {
    /// Returns whether a later page has items.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns whether an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Filters `items` and returns page `page` in store order.
///
/// See [`select_sorted`].
#[must_use]
pub fn select<'a>(
    items: &'a [WorkItem],
    criteria: &FilterCriteria,
    page: usize,
    page_size: usize,
) -> Page<'a> {
    select_sorted(items, criteria, Sort::default(), page, page_size)
}

/// Filters, stably sorts, and paginates `items`.
///
/// `page` is 1-indexed. A page outside `1..=total_pages` yields no items
/// rather than an error. A `page_size` of zero is treated as one.
#[must_use]
pub fn select_sorted<'a>(
    items: &'a [WorkItem],
    criteria: &FilterCriteria,
    sort: Sort,
    page: usize,
    page_size: usize,
) -> Page<'a> {
    let size = page_size.max(1);
    let mut filtered: Vec<&WorkItem> = items
        .iter()
        .filter(|item| criteria.matches(item))
        .collect();
    if sort.key != SortKey::StoreOrder {
        filtered.sort_by(|left, right| sort.compare(left, right));
    }

    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(size).max(1);
    let page_items = page.checked_sub(1).map_or_else(Vec::new, |index| {
        filtered
            .into_iter()
            .skip(index.saturating_mul(size))
            .take(size)
            .collect()
    });

    Page {
        items: page_items,
        page,
        page_size: size,
        total_items,
        total_pages,
    }
}

/// Stateful list view: criteria, sort, and page position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    criteria: FilterCriteria,
    sort: Sort,
    page: usize,
    page_size: usize,
}

impl ListView {
    /// Creates an unfiltered view on page 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: Sort::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Creates a view using the configured page size.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.page_size)
    }

    /// Returns the current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Returns the current sort rule.
    #[must_use]
    pub const fn sort(&self) -> Sort {
        self.sort
    }

    /// Returns the current 1-indexed page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces the criteria. Returns to page 1 when they differ.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria != criteria {
            self.criteria = criteria;
            self.page = 1;
        }
    }

    /// Sets the project filter.
    pub fn set_project(&mut self, project: Scope<ProjectId>) {
        self.update_criteria(|criteria| criteria.project = project);
    }

    /// Sets the status filter.
    pub fn set_status(&mut self, status: Scope<Status>) {
        self.update_criteria(|criteria| criteria.status = status);
    }

    /// Sets the priority filter.
    pub fn set_priority(&mut self, priority: Scope<Priority>) {
        self.update_criteria(|criteria| criteria.priority = priority);
    }

    /// Sets the assignee filter.
    pub fn set_assignee(&mut self, assignee: Scope<MemberId>) {
        self.update_criteria(|criteria| criteria.assignee = assignee);
    }

    /// Sets the free-text query; a blank string clears it.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let normalized = normalize_query(&query.into());
        self.update_criteria(|criteria| criteria.query = normalized);
    }

    /// Clears every filter field.
    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    /// Sets the sort rule. Returns to page 1 when it differs.
    pub fn set_sort(&mut self, sort: Sort) {
        if self.sort != sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    /// Sets the page size. Returns to page 1 when it differs.
    pub fn set_page_size(&mut self, page_size: usize) {
        let size = page_size.max(1);
        if self.page_size != size {
            self.page_size = size;
            self.page = 1;
        }
    }

    /// Moves to `page`. The filter result is unaffected; an out-of-range
    /// page renders empty.
    pub const fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Renders the current page from `items`.
    #[must_use]
    pub fn render<'a>(&self, items: &'a [WorkItem]) -> Page<'a> {
        select_sorted(items, &self.criteria, self.sort, self.page, self.page_size)
    }

    fn update_criteria(&mut self, change: impl FnOnce(&mut FilterCriteria)) {
        let mut next = self.criteria.clone();
        change(&mut next);
        self.set_criteria(next);
    }
}
