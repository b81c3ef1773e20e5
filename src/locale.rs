use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Pazartesi",
        Weekday::Tue => "Salı",
        Weekday::Wed => "Çarşamba",
        Weekday::Thu => "Perşembe",
        Weekday::Fri => "Cuma",
        Weekday::Sat => "Cumartesi",
        Weekday::Sun => "Pazar",
    }
}

/// Long Turkish date, e.g. `18 Ekim 2026 Pazar`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year(),
        weekday_name(date.weekday())
    )
}
