//! Fixed lookup tables the generator draws categorical fields from.

use rand::Rng;

/// Instrument types.
pub static INSTRUMENT_TYPES: &[&str] = &[
    "Corporate Bond",
    "Government Bond",
    "Municipal Bond",
    "Agency Bond",
    "Supranational Bond",
    "Convertible Bond",
    "Floating Rate Note",
    "Zero Coupon Bond",
    "Inflation-Linked Bond",
    "Covered Bond",
    "Asset-Backed Security",
    "Mortgage-Backed Security",
];

/// Issuers.
pub static ISSUERS: &[&str] = &[
    "US Treasury",
    "Bundesrepublik Deutschland",
    "UK Gilt",
    "Republic of France",
    "Government of Japan",
    "European Investment Bank",
    "World Bank",
    "Apple Inc",
    "Microsoft Corp",
    "JPMorgan Chase & Co",
    "Goldman Sachs Group",
    "Toyota Motor Credit",
    "Nestle Finance",
    "Siemens Financieringsmat",
    "BP Capital Markets",
    "Shell International Finance",
    "AT&T Inc",
    "Verizon Communications",
    "Ford Motor Credit",
    "Fannie Mae",
];

/// Industry sectors.
pub static SECTORS: &[&str] = &[
    "Sovereign",
    "Financials",
    "Technology",
    "Energy",
    "Utilities",
    "Industrials",
    "Consumer Staples",
    "Consumer Discretionary",
    "Healthcare",
    "Telecommunications",
    "Real Estate",
    "Materials",
];

/// Seniority in the capital structure.
pub static SENIORITIES: &[&str] = &[
    "Senior Secured",
    "Senior Unsecured",
    "Subordinated",
    "Junior Subordinated",
];

/// Coupon payment frequencies.
pub static COUPON_FREQUENCIES: &[&str] = &["Annual", "Semi-Annual", "Quarterly", "Monthly"];

/// ISO 4217 currency codes.
pub static CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "SEK"];

/// ISO 3166 alpha-2 country codes.
pub static COUNTRIES: &[&str] = &[
    "US", "DE", "GB", "FR", "JP", "CH", "CA", "AU", "NL", "SE", "IT", "ES",
];

/// Credit rating scale, best first.
pub static CREDIT_RATINGS: &[&str] = &[
    "AAA", "AA+", "AA", "AA-", "A+", "A", "A-", "BBB+", "BBB", "BBB-", "BB+", "BB", "BB-", "B+",
    "B", "B-", "CCC+", "CCC", "CCC-", "CC", "C", "D",
];

/// Rating agencies.
pub static RATING_AGENCIES: &[&str] = &["S&P", "Moody's", "Fitch"];

/// Face (par) values.
pub static FACE_VALUES: &[f64] = &[100.0, 1000.0];

/// Portfolios the position is booked in.
pub static PORTFOLIOS: &[&str] = &[
    "Global Aggregate",
    "Core Fixed Income",
    "High Yield Opportunities",
    "Short Duration",
    "Emerging Markets Debt",
    "Treasury Liquidity",
];

/// Market data vendors.
pub static DATA_SOURCES: &[&str] = &["Bloomberg", "Refinitiv", "ICE", "Markit", "Internal"];

/// Pricing sources.
pub static PRICING_SOURCES: &[&str] = &["BVAL", "CBBT", "Composite", "Evaluated", "Dealer Quote"];

/// Custodian banks.
pub static CUSTODIANS: &[&str] = &[
    "State Street",
    "BNY Mellon",
    "JPMorgan",
    "Citi",
    "Northern Trust",
];

/// Trade confirmation states.
pub static CONFIRMATION_STATUSES: &[&str] = &["Confirmed", "Pending", "Unconfirmed", "Disputed"];

/// Half-width (in percent) of each trailing-return window, shortest first:
/// 1d, 1w, 1m, 3m, 6m, ytd, 1y.
pub static RETURN_WINDOW_BOUNDS: [f64; 7] = [1.0, 2.5, 5.0, 8.0, 12.0, 12.0, 15.0];

/// Pick a uniformly random entry from a non-empty table.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Position of a rating on the scale (0 = AAA).
pub fn rating_rank(rating: &str) -> Option<usize> {
    CREDIT_RATINGS.iter().position(|r| *r == rating)
}
