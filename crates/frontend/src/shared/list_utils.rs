/// Утилиты для ячеек и заголовков списков (сортировка, форматирование)
use chrono::NaiveDate;
use contracts::shared::list::SortDirection;

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(
    current_field: Option<&str>,
    field: &str,
    direction: SortDirection,
) -> &'static str {
    if current_field == Some(field) {
        match direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

/// Форматирует денежное значение: 2 знака после запятой, пробел между тысячами
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{}{}.{}", sign, grouped, decimal_part)
}

/// DD.MM.YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}
