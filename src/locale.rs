use chrono::Weekday;

use crate::models::Direction;

/// Translation seam. Weekday and month abbreviations, series legends, and
/// the merged-slice label all come from the host application's translation
/// layer; the engine never hardcodes language-specific text.
pub trait Locale {
    fn weekday_abbrev(&self, weekday: Weekday) -> String;
    /// `month` is 1-based (January = 1).
    fn month_abbrev(&self, month: u32) -> String;
    fn series_label(&self, direction: Direction) -> String;
    fn others_label(&self) -> String;
}

/// Default English strings, matching chrono's `%a` / `%b` output.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocale;

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Locale for EnglishLocale {
    fn weekday_abbrev(&self, weekday: Weekday) -> String {
        weekday.to_string()
    }

    fn month_abbrev(&self, month: u32) -> String {
        let index = (month.clamp(1, 12) - 1) as usize;
        MONTH_ABBREVS[index].to_string()
    }

    fn series_label(&self, direction: Direction) -> String {
        match direction {
            Direction::Income => "Income".to_string(),
            Direction::Spent => "Spent".to_string(),
        }
    }

    fn others_label(&self) -> String {
        "Others".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_abbrev_matches_chrono() {
        assert_eq!(EnglishLocale.weekday_abbrev(Weekday::Mon), "Mon");
        assert_eq!(EnglishLocale.weekday_abbrev(Weekday::Sun), "Sun");
    }

    #[test]
    fn test_month_abbrev_is_one_based() {
        assert_eq!(EnglishLocale.month_abbrev(1), "Jan");
        assert_eq!(EnglishLocale.month_abbrev(12), "Dec");
        // Out-of-range months clamp instead of panicking.
        assert_eq!(EnglishLocale.month_abbrev(0), "Jan");
        assert_eq!(EnglishLocale.month_abbrev(13), "Dec");
    }
}
