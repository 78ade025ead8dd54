//! Shared fixtures for the engine integration tests. Helpers are shared
//! across several test files; not every file uses all of them.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use spendview::date_utils::DateRange;
use spendview::models::{Direction, Transaction};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub fn window(from: (i32, u32, u32), to: (i32, u32, u32)) -> DateRange {
    DateRange::from_dates(
        NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
        NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
    )
}

pub fn tx(
    id: &str,
    amount_cents: i64,
    direction: Direction,
    category: &str,
    created_at: NaiveDateTime,
) -> Transaction {
    Transaction {
        id: id.into(),
        amount_cents,
        direction: Some(direction),
        category: category.into(),
        created_at,
        note: None,
    }
}
