use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::entities::{
    ChargeCategory, Folio, FolioLine, FolioSummary, LodgingRecords, Reservation, TaxKind,
    TaxLine, TaxPolicy,
};

use super::{
    derivation::{balance, paid},
    utils::percent_of,
};

pub(crate) struct FolioProcessor<'a> {
    tax: &'a TaxPolicy,
}

impl<'a> FolioProcessor<'a> {
    pub(crate) fn new(tax: &'a TaxPolicy) -> Self {
        Self { tax }
    }

    /// Full GST rate for a line. Room tariffs are slabbed by per-night price.
    fn rate(&self, category: ChargeCategory, unit_price: Decimal) -> Decimal {
        match category {
            ChargeCategory::Room if unit_price > self.tax.room_threshold => self.tax.room_high_rate,
            ChargeCategory::Room => self.tax.room_low_rate,
            ChargeCategory::FoodAndBeverage => self.tax.food_rate,
            ChargeCategory::Service => self.tax.service_rate,
        }
    }

    fn room_line(&self, reservation: &Reservation) -> FolioLine {
        let nights = reservation.nights();
        let quantity = u64::from(reservation.rooms) * u64::from(nights);
        let gross = reservation.total();
        FolioLine {
            date: reservation.check_in,
            category: ChargeCategory::Room,
            description: format!(
                "{} ({} room{} x {} night{})",
                reservation.room_type,
                reservation.rooms,
                if reservation.rooms == 1 { "" } else { "s" },
                nights,
                if nights == 1 { "" } else { "s" },
            ),
            quantity,
            unit_price: reservation.rate,
            gross,
            discount: Decimal::ZERO,
            net: gross,
            tax_rate: self.rate(ChargeCategory::Room, reservation.rate),
        }
    }

    /// Tax lines grouped by component and rate. Intra-state supplies split
    /// the rate evenly between CGST and SGST; each component is computed on
    /// the pooled taxable amount and rounded once.
    fn tax_lines(&self, lines: &[FolioLine]) -> Vec<TaxLine> {
        let mut taxable_by_rate: BTreeMap<Decimal, Decimal> = BTreeMap::new();
        for line in lines.iter().filter(|l| !l.tax_rate.is_zero()) {
            *taxable_by_rate.entry(line.tax_rate).or_default() += line.net;
        }
        let components: &[TaxKind] = if self.tax.inter_state {
            &[TaxKind::Igst]
        } else {
            &[TaxKind::Cgst, TaxKind::Sgst]
        };
        let mut tax_lines = Vec::new();
        for (rate, taxable) in taxable_by_rate {
            let component_rate = rate / Decimal::from(components.len());
            for kind in components {
                tax_lines.push(TaxLine {
                    kind: *kind,
                    rate: component_rate.normalize(),
                    taxable,
                    amount: percent_of(taxable, component_rate),
                });
            }
        }
        tax_lines.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.rate.cmp(&b.rate)));
        tax_lines
    }

    /// Cancelled stays are billed without the room line; retained charges and
    /// receipts still appear.
    pub(crate) fn process(&self, records: &LodgingRecords, reservation: &Reservation) -> Folio {
        let room = (!reservation.is_cancelled()).then(|| self.room_line(reservation));
        let lines: Vec<FolioLine> = room
            .into_iter()
            .chain(records.charges_for(&reservation.id).into_iter().map(|c| {
                let gross = c.unit_price * Decimal::from(c.quantity);
                FolioLine {
                    date: c.date,
                    category: c.category,
                    description: c.description.clone(),
                    quantity: u64::from(c.quantity),
                    unit_price: c.unit_price,
                    gross,
                    discount: c.discount,
                    net: gross - c.discount,
                    tax_rate: self.rate(c.category, c.unit_price),
                }
            }))
            .collect();
        let tax_lines = self.tax_lines(&lines);
        let payments = records.payments_for(&reservation.id);

        let subtotal: Decimal = lines.iter().map(|l| l.gross).sum();
        let discount: Decimal = lines.iter().map(|l| l.discount).sum();
        let taxable = subtotal - discount;
        let tax: Decimal = tax_lines.iter().map(|t| t.amount).sum();
        let grand_total = taxable + tax;
        let paid = paid(payments.iter().copied());

        Folio {
            reservation_id: reservation.id.clone(),
            guest: reservation.guest.clone(),
            room_type: reservation.room_type.clone(),
            check_in: reservation.check_in,
            check_out: reservation.check_out,
            nights: reservation.nights(),
            lines,
            tax_lines,
            payments: payments.into_iter().cloned().collect(),
            summary: FolioSummary {
                subtotal,
                discount,
                taxable,
                tax,
                grand_total,
                paid,
                balance: balance(grand_total, Decimal::ZERO, paid),
            },
        }
    }
}
