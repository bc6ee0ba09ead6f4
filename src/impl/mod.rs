// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod charges_csv_datasource;
        pub(crate) mod payments_csv_datasource;
        pub(crate) mod policy_ron_datasource;
        pub(crate) mod reservations_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod label_model;
        pub(crate) mod policy_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod criteria;
        pub(crate) mod folio;
        pub(crate) mod payment;
        pub(crate) mod policy;
        pub(crate) mod records;
        pub(crate) mod reservation;
        pub(crate) mod route;
        pub(crate) mod settlement;
        pub(crate) mod status;
        pub(crate) mod views;
    }
    pub(crate) mod logic {
        pub(crate) mod derivation;
        pub(crate) mod draft_processor;
        pub(crate) mod filter;
        pub(crate) mod folio_processor;
        pub(crate) mod occupancy_processor;
        pub(crate) mod records_validator;
        pub(crate) mod route_parser;
        pub(crate) mod settlement_processor;
        pub(crate) mod sort;
        #[cfg(test)]
        mod test_fixtures;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_usecase;
        pub(crate) mod query_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod bill_printer;
    pub(crate) mod json_export;
    pub(crate) mod status_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::criteria::*;
        pub use crate::domain::entities::folio::*;
        pub use crate::domain::entities::payment::*;
        pub use crate::domain::entities::policy::*;
        pub use crate::domain::entities::records::*;
        pub use crate::domain::entities::reservation::*;
        pub use crate::domain::entities::route::*;
        pub use crate::domain::entities::settlement::*;
        pub use crate::domain::entities::status::*;
        pub use crate::domain::entities::views::*;
    }

    pub mod derivation {
        pub use crate::domain::logic::derivation::{advance, balance, paid};
    }

    pub mod formatting {
        pub use crate::presentation::utils::{format_amount, format_date, format_datetime, format_inr};
    }
}
