use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Direction of a money flow. Stored explicitly on modern records; legacy
/// records encode it in the sign of the amount instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Spent,
}

/// A single money movement as delivered by the transaction store.
/// Read-only input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Magnitude in cents. Legacy records may carry a negative value here
    /// when `direction` is absent; see [`Transaction::resolved_direction`].
    pub amount_cents: i64,
    #[serde(default)]
    pub direction: Option<Direction>,
    pub category: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub note: Option<String>,
}

impl Transaction {
    /// Non-negative magnitude of the movement. Saturates at `i64::MAX`
    /// rather than overflowing on `i64::MIN`.
    pub fn magnitude_cents(&self) -> i64 {
        self.amount_cents.saturating_abs()
    }

    /// Explicit direction when present; otherwise the legacy fallback,
    /// where a negative raw amount marks income.
    pub fn resolved_direction(&self) -> Direction {
        match self.direction {
            Some(direction) => direction,
            None if self.amount_cents < 0 => Direction::Income,
            None => Direction::Spent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(amount_cents: i64, direction: Option<Direction>) -> Transaction {
        Transaction {
            id: "t1".into(),
            amount_cents,
            direction,
            category: "food".into(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 5)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_explicit_direction_wins_over_sign() {
        let t = tx(-500, Some(Direction::Spent));
        assert_eq!(t.resolved_direction(), Direction::Spent);
        assert_eq!(t.magnitude_cents(), 500);
    }

    #[test]
    fn test_legacy_negative_amount_is_income() {
        let t = tx(-500, None);
        assert_eq!(t.resolved_direction(), Direction::Income);
    }

    #[test]
    fn test_legacy_positive_amount_is_spent() {
        let t = tx(500, None);
        assert_eq!(t.resolved_direction(), Direction::Spent);
    }

    #[test]
    fn test_magnitude_saturates_on_min_amount() {
        let t = tx(i64::MIN, None);
        assert_eq!(t.magnitude_cents(), i64::MAX);
        assert_eq!(t.resolved_direction(), Direction::Income);
    }
}
