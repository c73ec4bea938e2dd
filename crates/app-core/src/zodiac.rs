//! Zodiac sign catalogue
//!
//! The twelve tropical signs in calendar order starting with Aries, as
//! shown in the home screen carousel and used to seed a user's sign from
//! their birth date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Zodiac lookup errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZodiacError {
    /// No sign has the given identifier
    #[error("Unknown zodiac sign: {0}")]
    UnknownSign(String),
}

/// Result type for zodiac lookups
pub type Result<T> = std::result::Result<T, ZodiacError>;

/// Classical element of a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// Aries, Leo, Sagittarius
    Fire,
    /// Taurus, Virgo, Capricorn
    Earth,
    /// Gemini, Libra, Aquarius
    Air,
    /// Cancer, Scorpio, Pisces
    Water,
}

/// Month and day, ignoring the year
pub type MonthDay = (u32, u32);

/// A zodiac sign record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacSign {
    /// Stable identifier (lowercase English name)
    pub id: String,
    /// Display name
    pub name: String,
    /// Unicode glyph
    pub symbol: String,
    /// Element
    pub element: Element,
    /// First day of the sign (inclusive)
    pub start: MonthDay,
    /// Last day of the sign (inclusive)
    pub end: MonthDay,
}

impl ZodiacSign {
    /// Whether the sign's date range crosses the new year
    pub fn wraps_year(&self) -> bool {
        self.start > self.end
    }

    /// Whether a month/day falls inside this sign
    pub fn contains(&self, md: MonthDay) -> bool {
        range_contains(self.start, self.end, md)
    }

    /// Human readable date range, e.g. "Mar 21 – Apr 19"
    pub fn date_range_label(&self) -> String {
        format!(
            "{} {} – {} {}",
            month_abbrev(self.start.0),
            self.start.1,
            month_abbrev(self.end.0),
            self.end.1
        )
    }
}

const SIGN_TABLE: [(&str, &str, &str, Element, MonthDay, MonthDay); 12] = [
    ("aries", "Aries", "♈", Element::Fire, (3, 21), (4, 19)),
    ("taurus", "Taurus", "♉", Element::Earth, (4, 20), (5, 20)),
    ("gemini", "Gemini", "♊", Element::Air, (5, 21), (6, 20)),
    ("cancer", "Cancer", "♋", Element::Water, (6, 21), (7, 22)),
    ("leo", "Leo", "♌", Element::Fire, (7, 23), (8, 22)),
    ("virgo", "Virgo", "♍", Element::Earth, (8, 23), (9, 22)),
    ("libra", "Libra", "♎", Element::Air, (9, 23), (10, 22)),
    ("scorpio", "Scorpio", "♏", Element::Water, (10, 23), (11, 21)),
    ("sagittarius", "Sagittarius", "♐", Element::Fire, (11, 22), (12, 21)),
    ("capricorn", "Capricorn", "♑", Element::Earth, (12, 22), (1, 19)),
    ("aquarius", "Aquarius", "♒", Element::Air, (1, 20), (2, 18)),
    ("pisces", "Pisces", "♓", Element::Water, (2, 19), (3, 20)),
];

/// Number of signs in the catalogue
pub const SIGN_COUNT: usize = SIGN_TABLE.len();

const CAPRICORN: usize = 9;

fn range_contains(start: MonthDay, end: MonthDay, md: MonthDay) -> bool {
    if start > end {
        md >= start || md <= end
    } else {
        md >= start && md <= end
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

fn build(row: &(&str, &str, &str, Element, MonthDay, MonthDay)) -> ZodiacSign {
    let (id, name, symbol, element, start, end) = *row;
    ZodiacSign {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        element,
        start,
        end,
    }
}

/// All twelve signs in carousel order
pub fn signs() -> Vec<ZodiacSign> {
    SIGN_TABLE.iter().map(build).collect()
}

/// Look up a sign by identifier (case-insensitive)
pub fn find(id: &str) -> Result<ZodiacSign> {
    SIGN_TABLE
        .iter()
        .find(|row| row.0.eq_ignore_ascii_case(id))
        .map(build)
        .ok_or_else(|| ZodiacError::UnknownSign(id.to_string()))
}

/// Carousel index of the sign covering a date
pub fn index_for_date(date: NaiveDate) -> usize {
    let md = (date.month(), date.day());
    SIGN_TABLE
        .iter()
        .position(|row| range_contains(row.4, row.5, md))
        .unwrap_or(CAPRICORN)
}

/// Sign covering a date (e.g. a birth date)
pub fn sign_for_date(date: NaiveDate) -> ZodiacSign {
    build(&SIGN_TABLE[index_for_date(date)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_catalogue_order() {
        let all = signs();
        assert_eq!(all.len(), SIGN_COUNT);
        assert_eq!(all[0].id, "aries");
        assert_eq!(all[11].id, "pisces");
    }

    #[test]
    fn test_ranges_cover_every_day() {
        // 2024 is a leap year so Feb 29 is covered too
        let mut day = date(2024, 1, 1);
        while day.year() == 2024 {
            let md = (day.month(), day.day());
            let matches = signs().iter().filter(|s| s.contains(md)).count();
            assert_eq!(matches, 1, "{} matched {} signs", day, matches);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_sign_for_date_boundaries() {
        assert_eq!(sign_for_date(date(1990, 3, 21)).id, "aries");
        assert_eq!(sign_for_date(date(1990, 3, 20)).id, "pisces");
        assert_eq!(sign_for_date(date(1990, 12, 31)).id, "capricorn");
        assert_eq!(sign_for_date(date(1990, 1, 19)).id, "capricorn");
        assert_eq!(sign_for_date(date(1990, 1, 20)).id, "aquarius");
        assert_eq!(sign_for_date(date(2000, 2, 29)).id, "pisces");
    }

    #[test]
    fn test_index_for_date() {
        assert_eq!(index_for_date(date(1988, 8, 1)), 4);
        assert_eq!(index_for_date(date(1988, 12, 25)), CAPRICORN);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("Leo").unwrap().symbol, "♌");
        assert_eq!(
            find("ophiuchus"),
            Err(ZodiacError::UnknownSign("ophiuchus".to_string()))
        );
    }

    #[test]
    fn test_wraps_year() {
        assert!(find("capricorn").unwrap().wraps_year());
        assert!(!find("aries").unwrap().wraps_year());
    }

    #[test]
    fn test_date_range_label() {
        assert_eq!(find("aries").unwrap().date_range_label(), "Mar 21 – Apr 19");
    }

    #[test]
    fn test_element_serialization() {
        let json = serde_json::to_string(&Element::Water).unwrap();
        assert_eq!(json, "\"water\"");
    }
}
