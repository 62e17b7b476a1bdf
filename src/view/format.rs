use chrono::{NaiveDate, NaiveDateTime};

/// Formats an amount in Vietnamese đồng, e.g. `1.250.000 ₫`
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{} ₫", sign, grouped)
}

pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

pub fn format_date(value: &NaiveDate) -> String {
    value.format("%d/%m/%Y").to_string()
}

pub fn format_optional_datetime(value: Option<&NaiveDateTime>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

/// `150` → `2 giờ 30 phút`
pub fn format_duration_minutes(minutes: i32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    match (hours, rest) {
        (0, m) => format!("{} phút", m),
        (h, 0) => format!("{} giờ", h),
        (h, m) => format!("{} giờ {} phút", h, m),
    }
}

/// Parses the value of an `<input type="datetime-local">`
pub fn parse_datetime_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Renders a value for an `<input type="datetime-local">`
pub fn datetime_input_value(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}
