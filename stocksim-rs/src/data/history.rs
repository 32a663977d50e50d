//! Bounded, date-ordered price history

use crate::data::PricePoint;
use crate::error::SimError;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Result of pushing a point onto the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Point appended; `evicted` oldest points were dropped to respect the cap
    Appended { evicted: usize },
    /// A point for that date already exists, nothing changed
    AlreadyRecorded,
}

/// Price history ordered by date ascending.
///
/// Invariants: no duplicate dates, every price finite and > 0,
/// `len() <= max_len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
    max_len: usize,
}

impl PriceHistory {
    /// Create an empty history. A `max_len` of 0 is treated as 1.
    pub fn new(max_len: usize) -> Self {
        Self {
            points: Vec::new(),
            max_len: max_len.max(1),
        }
    }

    /// Build a history from arbitrary points, restoring the invariants.
    ///
    /// Sorts by date, keeps the last point of a duplicated date, drops
    /// invalid prices and evicts the oldest points beyond `max_len`.
    pub fn from_points(points: Vec<PricePoint>, max_len: usize) -> Self {
        let mut history = Self::new(max_len);
        let total = points.len();

        let mut valid: Vec<PricePoint> = points
            .into_iter()
            .filter(|p| {
                if !p.is_valid() {
                    warn!("Dropping invalid price {} on {}", p.price, p.date);
                }
                p.is_valid()
            })
            .collect();

        // Stable sort keeps file order among equal dates, so the later entry wins below
        valid.sort_by_key(|p| p.date);
        for point in valid {
            match history.points.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => history.points.push(point),
            }
        }

        let evicted = history.enforce_cap();
        if history.points.len() + evicted != total {
            debug!(
                "Normalized history: {} points in, {} kept, {} evicted",
                total,
                history.points.len(),
                evicted
            );
        }
        history
    }

    /// Append a point for a date after the last recorded one.
    pub fn push(&mut self, point: PricePoint) -> Result<PushOutcome, SimError> {
        if !point.is_valid() {
            return Err(SimError::InvalidPrice(point.price));
        }

        if let Some(last) = self.points.last() {
            if point.date == last.date {
                return Ok(PushOutcome::AlreadyRecorded);
            }
            if point.date < last.date {
                return Err(SimError::OutOfOrder {
                    date: point.date,
                    last: last.date,
                });
            }
        }

        self.points.push(point);
        let evicted = self.enforce_cap();
        Ok(PushOutcome::Appended { evicted })
    }

    fn enforce_cap(&mut self) -> usize {
        let excess = self.points.len().saturating_sub(self.max_len);
        if excess > 0 {
            self.points.drain(..excess);
        }
        excess
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn last_price(&self) -> Option<f64> {
        self.last().map(|p| p.price)
    }

    /// Whether the last recorded point is dated `date`
    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.last().map_or(false, |p| p.date == date)
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut history = PriceHistory::new(10);
        assert_eq!(
            history.push(PricePoint::new(day(1), 100.0)),
            Ok(PushOutcome::Appended { evicted: 0 })
        );
        assert_eq!(
            history.push(PricePoint::new(day(2), 101.0)),
            Ok(PushOutcome::Appended { evicted: 0 })
        );
        assert_eq!(history.len(), 2);
        assert_eq!(history.last_price(), Some(101.0));
    }

    #[test]
    fn test_push_same_date_is_noop() {
        let mut history = PriceHistory::new(10);
        history.push(PricePoint::new(day(1), 100.0)).unwrap();
        assert_eq!(
            history.push(PricePoint::new(day(1), 500.0)),
            Ok(PushOutcome::AlreadyRecorded)
        );
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_price(), Some(100.0));
    }

    #[test]
    fn test_push_rejects_older_date_and_bad_price() {
        let mut history = PriceHistory::new(10);
        history.push(PricePoint::new(day(5), 100.0)).unwrap();

        assert_eq!(
            history.push(PricePoint::new(day(4), 100.0)),
            Err(SimError::OutOfOrder { date: day(4), last: day(5) })
        );
        assert_eq!(
            history.push(PricePoint::new(day(6), 0.0)),
            Err(SimError::InvalidPrice(0.0))
        );
        assert!(history.push(PricePoint::new(day(6), f64::NAN)).is_err());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_push_at_capacity_evicts_oldest() {
        let mut history = PriceHistory::new(3);
        for d in 1..=3 {
            history.push(PricePoint::new(day(d), d as f64)).unwrap();
        }
        assert_eq!(history.len(), 3);

        let outcome = history.push(PricePoint::new(day(4), 4.0)).unwrap();
        assert_eq!(outcome, PushOutcome::Appended { evicted: 1 });
        assert_eq!(history.len(), 3);
        assert_eq!(history.first().unwrap().date, day(2));
        assert_eq!(history.last().unwrap().date, day(4));
    }

    #[test]
    fn test_from_points_normalizes() {
        let points = vec![
            PricePoint::new(day(3), 30.0),
            PricePoint::new(day(1), 10.0),
            PricePoint::new(day(2), -5.0),
            PricePoint::new(day(3), 33.0),
            PricePoint::new(day(4), 40.0),
        ];
        let history = PriceHistory::from_points(points, 2);

        assert_eq!(history.dates(), vec![day(3), day(4)]);
        assert_eq!(history.prices(), vec![33.0, 40.0]);
    }

    #[test]
    fn test_zero_cap_is_clamped() {
        let mut history = PriceHistory::new(0);
        history.push(PricePoint::new(day(1), 1.0)).unwrap();
        history.push(PricePoint::new(day(2), 2.0)).unwrap();
        assert_eq!(history.max_len(), 1);
        assert_eq!(history.len(), 1);
        assert!(history.has_date(day(2)));
    }
}
