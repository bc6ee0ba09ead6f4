use rust_decimal::Decimal;

use crate::entities::{
    BookingMode, BookingStatus, Charge, ChargeCategory, Guest, Occupancy, Payment, PaymentId,
    PaymentMode, PaymentType, Reservation,
};

pub(crate) fn reservation(
    id: &str,
    check_in: &str,
    check_out: &str,
    rooms: u32,
    rate: Decimal,
) -> Reservation {
    Reservation {
        id: id.parse().unwrap(),
        guest: Guest {
            name: "John Doe".into(),
            phone: None,
            email: None,
        },
        check_in: check_in.parse().unwrap(),
        check_out: check_out.parse().unwrap(),
        room_type: "Deluxe".into(),
        rooms,
        occupancy: Occupancy {
            adults: 2,
            children: 0,
        },
        rate,
        mode: BookingMode::Direct,
        status: BookingStatus::Confirmed,
        created_at: "2025-01-02T10:15:00".parse().unwrap(),
        verified: false,
    }
}

pub(crate) fn payment(id: &str, reservation_id: &str, kind: PaymentType, amount: Decimal) -> Payment {
    Payment {
        id: PaymentId(id.into()),
        reservation_id: reservation_id.parse().unwrap(),
        kind,
        amount,
        mode: PaymentMode::Cash,
        payer: "John Doe".into(),
        reference: None,
        date: "2025-01-03".parse().unwrap(),
        remarks: None,
    }
}

pub(crate) fn charge(
    reservation_id: &str,
    category: ChargeCategory,
    quantity: u32,
    unit_price: Decimal,
) -> Charge {
    Charge {
        reservation_id: reservation_id.parse().unwrap(),
        date: "2025-01-11".parse().unwrap(),
        category,
        description: "Sundry".into(),
        quantity,
        unit_price,
        discount: Decimal::ZERO,
    }
}
