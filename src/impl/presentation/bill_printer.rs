use crate::entities::{Folio, PaymentType};

use super::utils::{format_date, format_inr};

const WIDTH: usize = 78;
const DESCRIPTION_WIDTH: usize = 40;

/// Plain-text final bill, laid out for an 80-column printer.
pub(crate) struct BillPrinter;

impl BillPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_folio(&self, folio: &Folio) -> String {
        let mut output = String::new();

        output.push_str(&self.rule("Final Bill"));
        self.print_header(&mut output, folio);
        output.push('\n');

        output.push_str(&self.rule("Charges"));
        self.print_lines(&mut output, folio);
        output.push('\n');

        output.push_str(&self.rule("Taxes"));
        self.print_taxes(&mut output, folio);
        output.push('\n');

        output.push_str(&self.rule("Payments"));
        self.print_payments(&mut output, folio);
        output.push('\n');

        output.push_str(&self.rule("Summary"));
        self.print_summary(&mut output, folio);

        output
    }

    fn rule(&self, title: &str) -> String {
        let head = format!("--- {} ", title);
        format!("{}{}\n\n", head, "-".repeat(WIDTH.saturating_sub(head.chars().count())))
    }

    fn print_header(&self, output: &mut String, folio: &Folio) {
        output.push_str(&format!("Reservation: {}\n", folio.reservation_id));
        output.push_str(&format!("Guest:       {}\n", folio.guest.name));
        if let Some(phone) = &folio.guest.phone {
            output.push_str(&format!("Phone:       {}\n", phone));
        }
        if let Some(email) = &folio.guest.email {
            output.push_str(&format!("Email:       {}\n", email));
        }
        output.push_str(&format!(
            "Stay:        {} to {} ({} night{}), {}\n",
            format_date(folio.check_in),
            format_date(folio.check_out),
            folio.nights,
            if folio.nights == 1 { "" } else { "s" },
            folio.room_type,
        ));
    }

    fn print_lines(&self, output: &mut String, folio: &Folio) {
        for line in &folio.lines {
            let wrapped = textwrap::wrap(&line.description, DESCRIPTION_WIDTH);
            let first = wrapped.first().map(|s| s.to_string()).unwrap_or_default();
            output.push_str(&format!(
                "{}  {:40} {:>4} {:>16}\n",
                format_date(line.date),
                first,
                line.quantity,
                format_inr(line.gross),
            ));
            for rest in wrapped.iter().skip(1) {
                output.push_str(&format!("{:13}{}\n", "", rest));
            }
            if !line.discount.is_zero() {
                output.push_str(&format!(
                    "{:13}{:45} {:>16}\n",
                    "",
                    "Discount",
                    format!("-{}", format_inr(line.discount)),
                ));
            }
        }
    }

    fn print_taxes(&self, output: &mut String, folio: &Folio) {
        if folio.tax_lines.is_empty() {
            output.push_str("No tax applicable.\n");
        }
        for tax in &folio.tax_lines {
            output.push_str(&format!(
                "{:5} @ {:>5}% on {:>16} {:>29}\n",
                tax.kind.label(),
                tax.rate.to_string(),
                format_inr(tax.taxable),
                format_inr(tax.amount),
            ));
        }
    }

    fn print_payments(&self, output: &mut String, folio: &Folio) {
        if folio.payments.is_empty() {
            output.push_str("No payments recorded.\n");
        }
        for payment in &folio.payments {
            let amount = format_inr(payment.amount);
            output.push_str(&format!(
                "{}  {:12} {:8} {:13} {:>16}\n",
                format_date(payment.date),
                payment.id.as_str(),
                payment.kind.label(),
                payment.mode.label(),
                if payment.kind == PaymentType::Refund {
                    format!("-{}", amount)
                } else {
                    amount
                },
            ));
            if let Some(remarks) = &payment.remarks {
                for line in textwrap::wrap(remarks, WIDTH - 15) {
                    output.push_str(&format!("{:13}; {}\n", "", line));
                }
            }
        }
    }

    fn print_summary(&self, output: &mut String, folio: &Folio) {
        let s = &folio.summary;
        for (label, amount) in [
            ("Subtotal", s.subtotal),
            ("Discount", -s.discount),
            ("Taxable amount", s.taxable),
            ("Tax", s.tax),
            ("Grand total", s.grand_total),
            ("Paid", s.paid),
            ("Balance due", s.balance),
        ] {
            output.push_str(&format!("{:>59} {:>18}\n", label, format_inr(amount)));
        }
    }
}
