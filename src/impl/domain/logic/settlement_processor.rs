use std::collections::BTreeMap;

use crate::entities::{
    BookingMode, SettlementEntry, SettlementPolicy, SettlementReport, SettlementReportRow,
    SettlementStatus, SettlementTotals,
};

use super::{derivation::StayAccount, utils::percent_of};

pub(crate) struct SettlementProcessor<'a> {
    policy: &'a SettlementPolicy,
}

impl<'a> SettlementProcessor<'a> {
    pub(crate) fn new(policy: &'a SettlementPolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn entry(&self, account: &StayAccount<'_>) -> SettlementEntry {
        let r = account.reservation;
        let commission_rate = self.policy.commission_rate(r.mode);
        let commission = percent_of(account.total, commission_rate);
        SettlementEntry {
            reservation_id: r.id.clone(),
            guest_name: r.guest.name.clone(),
            mode: r.mode,
            check_in: r.check_in,
            check_out: r.check_out,
            total: account.total,
            commission_rate,
            commission,
            net_payable: account.total - commission,
            expected_advance: percent_of(account.total, self.policy.advance_split),
            advance: account.advance,
            paid: account.paid,
            balance: account.pending,
            verified: r.verified,
            status: SettlementStatus::from(account.status),
        }
    }

    /// Entries for every non-cancelled booking among `accounts`.
    pub(crate) fn entries(&self, accounts: &[StayAccount<'_>]) -> Vec<SettlementEntry> {
        accounts
            .iter()
            .filter(|a| !a.reservation.is_cancelled())
            .map(|a| self.entry(a))
            .collect()
    }

    /// Groups entries by booking mode. Modes without bookings are omitted;
    /// rows follow `BookingMode::ALL` order.
    pub(crate) fn report(&self, entries: &[SettlementEntry]) -> SettlementReport {
        let mut by_mode: BTreeMap<BookingMode, SettlementTotals> = BTreeMap::new();
        let mut grand_total = SettlementTotals::default();
        for entry in entries {
            by_mode.entry(entry.mode).or_default().add(entry);
            grand_total.add(entry);
        }
        let rows = BookingMode::ALL
            .iter()
            .filter_map(|mode| {
                by_mode.remove(mode).map(|totals| SettlementReportRow {
                    mode: *mode,
                    totals,
                })
            })
            .collect();
        SettlementReport { rows, grand_total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::entities::{BookingStatus, LodgingRecords, PaymentType};

    use super::super::test_fixtures::{payment, reservation};

    fn records() -> LodgingRecords {
        let mut agent = reservation("RES-2025-001", "2025-01-10", "2025-01-11", 1, dec!(1234.55));
        agent.mode = BookingMode::Agent;
        let direct = reservation("RES-2025-002", "2025-01-10", "2025-01-12", 1, dec!(2000));
        let mut cancelled = reservation("RES-2025-003", "2025-01-10", "2025-01-12", 1, dec!(3000));
        cancelled.status = BookingStatus::Cancelled;
        LodgingRecords {
            reservations: vec![agent, direct, cancelled],
            payments: vec![
                payment("RCP-2025-001", "RES-2025-001", PaymentType::Advance, dec!(400)),
                payment("RCP-2025-002", "RES-2025-002", PaymentType::Full, dec!(4000)),
            ],
            charges: vec![],
        }
    }

    #[test]
    fn test_commission_rounds_half_away_from_zero() {
        let records = records();
        let policy = SettlementPolicy::default();
        let account = StayAccount::new(&records, &records.reservations[0]);
        let entry = SettlementProcessor::new(&policy).entry(&account);
        assert_eq!(entry.commission_rate, dec!(10));
        assert_eq!(entry.commission, dec!(123.46));
        assert_eq!(entry.net_payable, dec!(1111.09));
        assert_eq!(entry.expected_advance, dec!(370.37));
        assert_eq!(entry.balance, dec!(834.55));
        assert_eq!(entry.status, SettlementStatus::PartiallySettled);
    }

    #[test]
    fn test_report_totals_skip_cancelled() {
        let records = records();
        let policy = SettlementPolicy::default();
        let processor = SettlementProcessor::new(&policy);
        let entries = processor.entries(&StayAccount::all(&records));
        assert_eq!(entries.len(), 2);

        let report = processor.report(&entries);
        assert_eq!(
            report.rows.iter().map(|r| r.mode).collect::<Vec<_>>(),
            vec![BookingMode::Direct, BookingMode::Agent]
        );
        assert_eq!(report.grand_total.bookings, 2);
        assert_eq!(report.grand_total.total, dec!(5234.55));
        assert_eq!(report.grand_total.commission, dec!(123.46));
        assert_eq!(report.grand_total.paid, dec!(4400));
    }
}
