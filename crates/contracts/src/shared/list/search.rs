/// Trait для типов данных, поддерживающих локальный поиск
pub trait Searchable {
    /// Текстовые поля, по которым выполняется поиск
    fn search_fields(&self) -> Vec<&str>;

    /// Проверяет, соответствует ли объект поисковому запросу
    /// (регистронезависимое вхождение подстроки в любое из полей)
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
