use crate::entities::{
    BadgeTone, BookingMode, BookingStatus, ChargeCategory, PaymentMode, PaymentStatus,
    PaymentType, SettlementStatus, TaxKind,
};

impl BadgeTone {
    /// Utility classes for the badge background and text.
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "bg-green-100 text-green-800",
            BadgeTone::Warning => "bg-yellow-100 text-yellow-800",
            BadgeTone::Info => "bg-blue-100 text-blue-800",
            BadgeTone::Danger => "bg-red-100 text-red-800",
            BadgeTone::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

macro_rules! labels {
    ($t:ty { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $t {
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.label())
            }
        }
    };
}

labels!(PaymentStatus {
    Pending => "Pending",
    Partial => "Partial",
    Paid => "Paid",
});

labels!(SettlementStatus {
    Pending => "Pending",
    PartiallySettled => "Partially Settled",
    Settled => "Settled",
});

labels!(BookingStatus {
    Pending => "Pending",
    Confirmed => "Confirmed",
    CheckedIn => "Checked In",
    CheckedOut => "Checked Out",
    Cancelled => "Cancelled",
});

labels!(BookingMode {
    Direct => "Direct",
    Agent => "Agent",
    Company => "Company",
    Ota => "OTA",
    AccessRooms => "Access Rooms",
});

labels!(PaymentType {
    Advance => "Advance",
    Balance => "Balance",
    Full => "Full",
    Refund => "Refund",
});

labels!(PaymentMode {
    Cash => "Cash",
    Card => "Card",
    Upi => "UPI",
    BankTransfer => "Bank Transfer",
    Online => "Online",
});

labels!(ChargeCategory {
    Room => "Room",
    FoodAndBeverage => "Food & Beverage",
    Service => "Service",
});

labels!(TaxKind {
    Cgst => "CGST",
    Sgst => "SGST",
    Igst => "IGST",
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Badge as _;

    #[test]
    fn test_labels_parse_back() {
        for mode in BookingMode::ALL {
            assert_eq!(mode.label().parse::<BookingMode>().unwrap(), mode);
        }
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(status.to_string().parse::<BookingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_settled_and_paid_share_a_tone() {
        assert_eq!(PaymentStatus::Paid.tone(), SettlementStatus::Settled.tone());
        assert_eq!(PaymentStatus::Pending.tone(), SettlementStatus::Pending.tone());
        assert_eq!(
            PaymentStatus::Paid.tone().css_class(),
            "bg-green-100 text-green-800"
        );
    }
}
