use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 500;

/// Prefix of query parameters carrying extra field filters (`filter.status=paid`)
pub const FILTER_PREFIX: &str = "filter.";

/// Направление сортировки
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Case-insensitive parse of `"asc"` / `"desc"`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Parameters of one paged list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Scope restriction (e.g. `customer` / `vendor` for counterparties)
    pub entity_filter: Option<String>,
    /// One-based page number
    pub page: u64,
    pub page_size: u64,
    /// Exact-match field filters
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    /// `None` means server-default ordering
    pub sort_by: Option<String>,
    pub sort_direction: SortDirection,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            entity_filter: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filters: BTreeMap::new(),
            sort_by: None,
            sort_direction: SortDirection::Asc,
        }
    }
}

impl ListQuery {
    /// Offset of the first record of the requested page
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Query-string pairs (not yet URL-encoded)
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("sortBy".to_string(), sort_by.to_string()));
            pairs.push((
                "sortDirection".to_string(),
                self.sort_direction.as_str().to_string(),
            ));
        }
        if let Some(scope) = self.entity_filter.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("entityFilter".to_string(), scope.to_string()));
        }
        for (field, value) in &self.filters {
            pairs.push((format!("{}{}", FILTER_PREFIX, field), value.clone()));
        }
        pairs
    }

    /// Lenient parse of query-string pairs.
    ///
    /// Unknown keys are ignored, malformed numbers fall back to defaults,
    /// `page` is at least 1 and `pageSize` is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => {
                    query.page = value.trim().parse::<u64>().unwrap_or(1).max(1);
                }
                "pageSize" => {
                    query.page_size = match value.trim().parse::<u64>() {
                        Ok(0) | Err(_) => DEFAULT_PAGE_SIZE,
                        Ok(size) => size.min(MAX_PAGE_SIZE),
                    };
                }
                "sortBy" => {
                    let value = value.trim();
                    query.sort_by = (!value.is_empty()).then(|| value.to_string());
                }
                "sortDirection" => {
                    query.sort_direction = SortDirection::parse(&value).unwrap_or_default();
                }
                "entityFilter" => {
                    let value = value.trim();
                    query.entity_filter = (!value.is_empty()).then(|| value.to_string());
                }
                other => {
                    if let Some(field) = other.strip_prefix(FILTER_PREFIX) {
                        if !field.is_empty() {
                            query.filters.insert(field.to_string(), value);
                        }
                    }
                }
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_pairs_survive_parse() {
        let mut query = ListQuery {
            entity_filter: Some("vendor".to_string()),
            page: 3,
            page_size: 25,
            sort_by: Some("orderDate".to_string()),
            sort_direction: SortDirection::Desc,
            ..Default::default()
        };
        query.filters.insert("status".to_string(), "paid".to_string());

        assert_eq!(ListQuery::from_pairs(query.to_pairs()), query);
    }

    #[test]
    fn test_sort_direction_omitted_without_sort_field() {
        let keys: Vec<String> = ListQuery::default()
            .to_pairs()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["page", "pageSize"]);
    }

    #[test]
    fn test_from_pairs_is_lenient() {
        let query = ListQuery::from_pairs(pairs(&[
            ("page", "0"),
            ("pageSize", "100000"),
            ("sortBy", " "),
            ("sortDirection", "DESC"),
            ("filter.", "ignored"),
            ("unknown", "x"),
        ]));
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, MAX_PAGE_SIZE);
        assert_eq!(query.sort_by, None);
        assert_eq!(query.sort_direction, SortDirection::Desc);
        assert!(query.filters.is_empty());

        let query = ListQuery::from_pairs(pairs(&[("page", "abc"), ("pageSize", "0")]));
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_offset() {
        let query = ListQuery {
            page: 3,
            page_size: 20,
            ..Default::default()
        };
        assert_eq!(query.offset(), 40);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }
}
