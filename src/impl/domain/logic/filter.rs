use fractic_server_error::ServerError;

use crate::{
    entities::{DateField, FilterCriteria, Reservation, Selection},
    errors::InvalidDateRange,
};

use super::derivation::StayAccount;

impl FilterCriteria {
    pub(crate) fn validate(&self) -> Result<(), ServerError> {
        match (self.from, self.to) {
            (Some(from), Some(to)) if from > to => Err(InvalidDateRange::new(&from, &to)),
            _ => Ok(()),
        }
    }

    fn matches_query(&self, reservation: &Reservation) -> bool {
        let needle = match self.query.as_deref().map(str::trim) {
            None | Some("") => return true,
            Some(q) => q.to_lowercase(),
        };
        [reservation.id.as_str(), reservation.guest.name.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_range(&self, reservation: &Reservation) -> bool {
        let date = match self.date_field {
            DateField::CheckIn => reservation.check_in,
            DateField::CheckOut => reservation.check_out,
        };
        self.from.map_or(true, |from| from <= date) && self.to.map_or(true, |to| date <= to)
    }

    pub(crate) fn matches(&self, account: &StayAccount<'_>) -> bool {
        let r = account.reservation;
        self.matches_query(r)
            && self.booking_status.matches(&r.status)
            && self.payment_status.matches(&account.status)
            && self.mode.matches(&r.mode)
            && match self.payment_mode {
                Selection::All => true,
                Selection::Only(mode) => account.payments.iter().any(|p| p.mode == mode),
            }
            && self.matches_range(r)
    }
}

/// Accounts satisfying every criterion, in their original order.
pub(crate) fn filter_accounts<'a>(
    accounts: Vec<StayAccount<'a>>,
    criteria: &FilterCriteria,
) -> Result<Vec<StayAccount<'a>>, ServerError> {
    criteria.validate()?;
    Ok(accounts.into_iter().filter(|a| criteria.matches(a)).collect())
}
