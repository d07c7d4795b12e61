//! Reference license data: records, lookup table, sources and expiry reporting

pub mod expiring;
pub mod lookup;
pub mod model;
pub mod source;

pub use expiring::{expiring_within, sort_by_expiration, ExpiringLicense, DEFAULT_EXPIRING_DAYS};
pub use lookup::LicenseLookup;
pub use model::{LicenseRecord, LicenseStatus};
pub use source::{JsonFileLicenseSource, LicenseSource, StaticLicenseSource};
