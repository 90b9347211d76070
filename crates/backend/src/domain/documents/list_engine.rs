//! SQL для списка документов: фильтры, сортировка и пагинация на стороне SQLite.
//!
//! Поля записи читаются через `json_extract(data_json, ?)`; путь к полю
//! передаётся параметром, в текст запроса попадают только проверенные имена.
//! Порядок по умолчанию: новые первыми; он же добивает сортировку при равных ключах.

use contracts::shared::list::{ListQuery, SortDirection, MAX_PAGE_SIZE};
use sea_orm::{DatabaseBackend, Statement, Value as SqlValue};

use super::registry::CollectionDef;

const DEFAULT_ORDER: &str = "created_at DESC, code DESC";

/// Готовый к выполнению запрос одной страницы
#[derive(Debug, Clone)]
pub struct ListSql {
    /// Запрошенная страница, от 1
    pub page: u64,
    /// Размер страницы, `1..=MAX_PAGE_SIZE`
    pub page_size: u64,
    where_clause: String,
    where_values: Vec<SqlValue>,
    order_clause: String,
    order_values: Vec<SqlValue>,
}

/// `$.field` for plain JSON keys; anything else cannot be addressed
fn json_path(field: &str) -> Option<String> {
    let field = field.trim();
    let plain = !field.is_empty() && field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    plain.then(|| format!("$.{}", field))
}

impl ListSql {
    pub fn build(def: &CollectionDef, query: &ListQuery) -> Self {
        let mut conditions = vec![
            "collection = ?".to_string(),
            "is_deleted = 0".to_string(),
        ];
        let mut where_values: Vec<SqlValue> = vec![def.collection.into()];

        let scope = query
            .entity_filter
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|scope| (def.scope_field, scope));
        let filters = query
            .filters
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()));

        for (field, expected) in scope.into_iter().chain(filters) {
            match json_path(field) {
                Some(path) => {
                    // числа сравниваются в текстовом виде, регистр не важен
                    conditions.push(
                        "lower(CAST(json_extract(data_json, ?) AS TEXT)) = lower(?)".to_string(),
                    );
                    where_values.push(path.into());
                    where_values.push(expected.trim().to_string().into());
                }
                None => conditions.push("0 = 1".to_string()),
            }
        }

        let sort_path = query.sort_by.as_deref().and_then(json_path);
        let (order_clause, order_values) = match sort_path {
            Some(path) => {
                let direction = match query.sort_direction {
                    SortDirection::Asc => "ASC",
                    SortDirection::Desc => "DESC",
                };
                // пустые значения в конце при любом направлении
                let clause = format!(
                    "json_extract(data_json, ?) IS NULL, json_extract(data_json, ?) COLLATE NOCASE {}, {}",
                    direction, DEFAULT_ORDER
                );
                (clause, vec![path.clone().into(), path.into()])
            }
            None => (DEFAULT_ORDER.to_string(), Vec::new()),
        };

        Self {
            page: query.page.max(1),
            page_size: query.page_size.clamp(1, MAX_PAGE_SIZE),
            where_clause: conditions.join(" AND "),
            where_values,
            order_clause,
            order_values,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }

    /// `SELECT COUNT(*) AS cnt ...` over the filtered rows
    pub fn count_statement(&self) -> Statement {
        let sql = format!(
            "SELECT COUNT(*) AS cnt FROM documents WHERE {}",
            self.where_clause
        );
        Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            sql.as_str(),
            self.where_values.clone(),
        )
    }

    pub fn page_statement(&self) -> Statement {
        let sql = format!(
            "SELECT * FROM documents WHERE {} ORDER BY {} LIMIT {} OFFSET {}",
            self.where_clause,
            self.order_clause,
            self.page_size,
            self.offset()
        );
        let values = self
            .where_values
            .iter()
            .chain(self.order_values.iter())
            .cloned()
            .collect::<Vec<_>>();
        Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql.as_str(), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::documents::registry::find_collection;

    fn values(stmt: &Statement) -> Vec<SqlValue> {
        stmt.values.clone().map(|v| v.0).unwrap_or_default()
    }

    #[test]
    fn test_json_path_accepts_plain_keys_only() {
        assert_eq!(json_path("totalAmount").as_deref(), Some("$.totalAmount"));
        assert_eq!(json_path(" status ").as_deref(), Some("$.status"));
        assert_eq!(json_path("lines[0]"), None);
        assert_eq!(json_path("a.b"), None);
        assert_eq!(json_path("x') OR 1=1 --"), None);
        assert_eq!(json_path(""), None);
    }

    #[test]
    fn test_default_query_keeps_newest_first() {
        let def = find_collection("invoices").unwrap();
        let sql = ListSql::build(def, &ListQuery::default());

        let page = sql.page_statement();
        assert!(page.sql.contains("ORDER BY created_at DESC, code DESC"));
        assert!(page.sql.ends_with("LIMIT 10 OFFSET 0"));
        assert_eq!(values(&page), vec![SqlValue::from("invoices")]);
    }

    #[test]
    fn test_scope_uses_collection_scope_field() {
        let def = find_collection("counterparties").unwrap();
        let query = ListQuery {
            entity_filter: Some(" vendor ".to_string()),
            ..ListQuery::default()
        };
        let count = ListSql::build(def, &query).count_statement();
        assert!(count.sql.starts_with("SELECT COUNT(*) AS cnt FROM documents WHERE"));
        assert_eq!(
            values(&count),
            vec![
                SqlValue::from("counterparties"),
                SqlValue::from("$.kind"),
                SqlValue::from("vendor"),
            ]
        );
    }

    #[test]
    fn test_unaddressable_filter_matches_nothing() {
        let def = find_collection("invoices").unwrap();
        let mut query = ListQuery::default();
        query
            .filters
            .insert("customerName' --".to_string(), "x".to_string());
        let count = ListSql::build(def, &query).count_statement();
        assert!(count.sql.contains("0 = 1"));
        assert!(!count.sql.contains("--"));
    }

    #[test]
    fn test_sort_binds_field_path_and_direction() {
        let def = find_collection("invoices").unwrap();
        let query = ListQuery {
            sort_by: Some("totalAmount".to_string()),
            sort_direction: SortDirection::Desc,
            ..ListQuery::default()
        };
        let page = ListSql::build(def, &query).page_statement();
        assert!(page.sql.contains("IS NULL, json_extract(data_json, ?) COLLATE NOCASE DESC"));
        assert_eq!(values(&page).len(), 3);

        let query = ListQuery {
            sort_by: Some("total amount".to_string()),
            ..ListQuery::default()
        };
        let page = ListSql::build(def, &query).page_statement();
        assert!(page.sql.contains("ORDER BY created_at DESC"));
    }

    #[test]
    fn test_page_params_are_clamped() {
        let def = find_collection("invoices").unwrap();
        let sql = ListSql::build(
            def,
            &ListQuery {
                page: 0,
                page_size: 0,
                ..ListQuery::default()
            },
        );
        assert_eq!((sql.page, sql.page_size, sql.offset()), (1, 1, 0));

        let sql = ListSql::build(
            def,
            &ListQuery {
                page: 3,
                page_size: 10_000,
                ..ListQuery::default()
            },
        );
        assert_eq!(sql.page_size, MAX_PAGE_SIZE);
        assert_eq!(sql.offset(), 2 * MAX_PAGE_SIZE);

        let sql = ListSql::build(
            def,
            &ListQuery {
                page: u64::MAX,
                ..ListQuery::default()
            },
        );
        assert_eq!(sql.offset(), i64::MAX as u64);
    }
}
