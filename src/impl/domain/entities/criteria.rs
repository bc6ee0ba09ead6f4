use std::str::FromStr;

use chrono::NaiveDate;

use super::{
    payment::PaymentMode,
    reservation::{BookingMode, BookingStatus},
    status::PaymentStatus,
};

/// An enum filter: either the "all" sentinel or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

/// Which stay date a date-range filter is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateField {
    #[default]
    CheckIn,
    CheckOut,
}

/// Conjunction of everything a listing can be narrowed by. The default
/// matches every record.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of reservation id or guest name.
    pub query: Option<String>,
    pub booking_status: Selection<BookingStatus>,
    pub payment_status: Selection<PaymentStatus>,
    pub mode: Selection<BookingMode>,
    /// Matches reservations with at least one payment in this mode.
    pub payment_mode: Selection<PaymentMode>,
    pub date_field: DateField,
    /// Inclusive.
    pub from: Option<NaiveDate>,
    /// Inclusive.
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ReservationId,
    Guest,
    CheckIn,
    CheckOut,
    Total,
    Pending,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Tri-state column sort: ascending, descending, then back to record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted(SortKey, SortDirection),
}

// --

impl<T> Selection<T> {
    pub fn matches(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Selection::All => true,
            Selection::Only(v) => v == value,
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr,
{
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl FilterCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_mode(mut self, mode: BookingMode) -> Self {
        self.mode = Selection::Only(mode);
        self
    }

    pub fn with_booking_status(mut self, status: BookingStatus) -> Self {
        self.booking_status = Selection::Only(status);
        self
    }

    pub fn with_payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Selection::Only(status);
        self
    }

    pub fn with_payment_mode(mut self, mode: PaymentMode) -> Self {
        self.payment_mode = Selection::Only(mode);
        self
    }

    pub fn with_range(
        mut self,
        field: DateField,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Self {
        self.date_field = field;
        self.from = from;
        self.to = to;
        self
    }
}

impl SortState {
    /// Next state after the header for `key` is clicked.
    pub fn toggle(self, key: SortKey) -> Self {
        match self {
            SortState::Sorted(k, SortDirection::Ascending) if k == key => {
                SortState::Sorted(key, SortDirection::Descending)
            }
            SortState::Sorted(k, SortDirection::Descending) if k == key => SortState::Unsorted,
            _ => SortState::Sorted(key, SortDirection::Ascending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_state_cycles_through_three_states() {
        let s = SortState::default().toggle(SortKey::Total);
        assert_eq!(s, SortState::Sorted(SortKey::Total, SortDirection::Ascending));
        let s = s.toggle(SortKey::Total);
        assert_eq!(s, SortState::Sorted(SortKey::Total, SortDirection::Descending));
        let s = s.toggle(SortKey::Total);
        assert_eq!(s, SortState::Unsorted);
    }

    #[test]
    fn test_sort_state_switching_key_restarts_ascending() {
        let s = SortState::Sorted(SortKey::Total, SortDirection::Descending);
        assert_eq!(
            s.toggle(SortKey::Guest),
            SortState::Sorted(SortKey::Guest, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_selection_all_matches_everything() {
        let s: Selection<u8> = Selection::All;
        assert!(s.matches(&1));
        assert!(Selection::Only(1).matches(&1));
        assert!(!Selection::Only(1).matches(&2));
    }

    #[test]
    fn test_selection_parses_sentinel() {
        assert_eq!("all".parse::<Selection<u8>>().unwrap(), Selection::All);
        assert_eq!("ALL".parse::<Selection<u8>>().unwrap(), Selection::All);
        assert_eq!("3".parse::<Selection<u8>>().unwrap(), Selection::Only(3));
        assert!("x".parse::<Selection<u8>>().is_err());
    }
}
