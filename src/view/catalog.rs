use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::model::category::Category;
use crate::model::course::{Course, CourseFilters};

pub const READ_MORE_LIMIT: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseSort {
    #[default]
    Latest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl CourseSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseSort::Latest => "latest",
            CourseSort::Oldest => "oldest",
            CourseSort::TitleAsc => "title-asc",
            CourseSort::TitleDesc => "title-desc",
        }
    }

    /// Unknown keys fall back to `latest`.
    pub fn parse_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl FromStr for CourseSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "latest" => Ok(CourseSort::Latest),
            "oldest" => Ok(CourseSort::Oldest),
            "title-asc" => Ok(CourseSort::TitleAsc),
            "title-desc" => Ok(CourseSort::TitleDesc),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

impl fmt::Display for CourseSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the backend's ISO timestamps; unparseable values sort as oldest.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

pub fn sort_courses(courses: &mut [Course], sort: CourseSort) {
    match sort {
        CourseSort::Latest => {
            courses.sort_by(|a, b| parse_timestamp(&b.created_at).cmp(&parse_timestamp(&a.created_at)))
        }
        CourseSort::Oldest => {
            courses.sort_by(|a, b| parse_timestamp(&a.created_at).cmp(&parse_timestamp(&b.created_at)))
        }
        CourseSort::TitleAsc => courses.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        CourseSort::TitleDesc => courses.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
}

/// Catalog and dashboard list state: server-side filters, client-side sort
/// and pagination.
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub filters: CourseFilters,
    pub sort: CourseSort,
    pub page: usize,
    pub page_size: usize,
    courses: Vec<Course>,
    category_names: HashMap<String, String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        CatalogState {
            filters: CourseFilters::default(),
            sort: CourseSort::default(),
            page: 0,
            page_size: page_size.max(1),
            courses: Vec::new(),
            category_names: HashMap::new(),
        }
    }

    pub fn set_categories(&mut self, categories: &[Category]) {
        self.category_names = categories
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect();
    }

    pub fn category_name(&self, category_id: &str) -> &str {
        self.category_names
            .get(category_id)
            .map(String::as_str)
            .unwrap_or("Unknown")
    }

    /// Replaces the loaded list and applies the current sort.
    pub fn set_courses(&mut self, courses: Vec<Course>) {
        self.courses = courses;
        sort_courses(&mut self.courses, self.sort);
        if self.page >= self.page_count() {
            self.page = 0;
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Filters change what the server returns, so the page resets.
    pub fn set_filters(&mut self, filters: CourseFilters) {
        self.filters = filters;
        self.page = 0;
    }

    pub fn set_sort(&mut self, sort: CourseSort) {
        self.sort = sort;
        sort_courses(&mut self.courses, sort);
        self.page = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filters = CourseFilters::default();
        self.sort = CourseSort::default();
        self.page = 0;
    }

    pub fn page_count(&self) -> usize {
        self.courses.len().div_ceil(self.page_size)
    }

    pub fn set_page(&mut self, page: usize, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = page;
    }

    pub fn current_page(&self) -> &[Course] {
        let start = (self.page * self.page_size).min(self.courses.len());
        let end = (start + self.page_size).min(self.courses.len());
        &self.courses[start..end]
    }
}

pub fn should_show_read_more(description: &str) -> bool {
    description.chars().count() > READ_MORE_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, title: &str, created_at: &str) -> Course {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "createdAt": created_at,
        }))
        .unwrap()
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    fn sample() -> Vec<Course> {
        vec![
            course("a", "beta", "2024-02-01T10:00:00"),
            course("b", "Alpha", "2024-03-01T10:00:00Z"),
            course("c", "gamma", "2024-01-01T10:00:00.123"),
        ]
    }

    #[test]
    fn sorts_by_each_key() {
        let mut courses = sample();
        sort_courses(&mut courses, CourseSort::Latest);
        assert_eq!(ids(&courses), vec!["b", "a", "c"]);
        sort_courses(&mut courses, CourseSort::Oldest);
        assert_eq!(ids(&courses), vec!["c", "a", "b"]);
        sort_courses(&mut courses, CourseSort::TitleAsc);
        assert_eq!(ids(&courses), vec!["b", "a", "c"]);
        sort_courses(&mut courses, CourseSort::TitleDesc);
        assert_eq!(ids(&courses), vec!["c", "a", "b"]);
    }

    #[test]
    fn unknown_sort_key_defaults_to_latest() {
        assert_eq!(CourseSort::parse_or_default("popular"), CourseSort::Latest);
        assert_eq!(CourseSort::parse_or_default("title-desc"), CourseSort::TitleDesc);
    }

    #[test]
    fn paginates_and_resets_on_sort() {
        let mut state = CatalogState::new(2);
        state.set_courses(sample());
        assert_eq!(state.page_count(), 2);

        state.set_page(1, 2);
        assert_eq!(ids(state.current_page()), vec!["c"]);

        state.set_sort(CourseSort::TitleAsc);
        assert_eq!(state.page, 0);
        assert_eq!(ids(state.current_page()), vec!["b", "a"]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let mut state = CatalogState::new(12);
        state.set_courses(sample());
        state.set_page(5, 12);
        assert!(state.current_page().is_empty());
    }

    #[test]
    fn filter_change_resets_page() {
        let mut state = CatalogState::new(1);
        state.set_courses(sample());
        state.set_page(2, 1);
        state.set_filters(CourseFilters {
            search: Some("rust".into()),
            ..Default::default()
        });
        assert_eq!(state.page, 0);
    }

    #[test]
    fn unknown_category_falls_back() {
        let mut state = CatalogState::default();
        state.set_categories(&[serde_json::from_value(serde_json::json!({
            "id": "c1", "name": "Programming", "active": true
        }))
        .unwrap()]);
        assert_eq!(state.category_name("c1"), "Programming");
        assert_eq!(state.category_name("zz"), "Unknown");
    }

    #[test]
    fn read_more_threshold() {
        assert!(!should_show_read_more(&"x".repeat(120)));
        assert!(should_show_read_more(&"x".repeat(121)));
    }
}
