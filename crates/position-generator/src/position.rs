//! Synthetic fixed-income position records.
//!
//! A record is built in three stages:
//!
//! ```text
//! Primaries::draw      independent random draws (dates, rates, catalogs, offsets)
//!        │
//!        ▼
//! Derived::compute     algebraic functions of the primaries, in dependency order
//!        │
//!        ▼
//! Position::assemble   flat record, optional features nulled out
//! ```
//!
//! Derived fields are never drawn on their own. `askPrice`, `modifiedDuration`,
//! `costBasis` and friends always satisfy their identities against the fields
//! they are computed from.

use crate::catalog::{self, pick};
use crate::generators::numeric::{float_range, int_range, round_to, symmetric};
use crate::generators::pattern::generate_pattern;
use crate::generators::timestamp::{date_in_future, date_in_past, DAYS_PER_YEAR};
use crate::GeneratorError;
use chrono::{DateTime, NaiveDate, Utc};
use grid_core::Row;
use rand::Rng;
use serde::Serialize;

/// Probability that a bond carries a call feature.
pub const CALL_FEATURE_PROBABILITY: f64 = 0.30;

/// Probability that a bond carries a put feature.
pub const PUT_FEATURE_PROBABILITY: f64 = 0.15;

/// One synthetic fixed-income holding.
///
/// Serializes as a flat camelCase JSON object; optional fields serialize as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: u64,

    // Instrument
    pub instrument_type: String,
    pub issuer: String,
    pub sector: String,
    pub seniority: String,
    pub issue_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub coupon_rate: f64,
    pub coupon_frequency: String,
    pub ytm: f64,
    pub currency: String,
    pub country: String,
    pub credit_rating: String,
    pub rating_agency: String,

    // Identifiers
    pub isin: String,
    pub cusip: String,
    pub sedol: String,
    pub ticker: String,

    // Pricing
    pub face_value: f64,
    pub clean_price: f64,
    pub accrued_interest: f64,
    pub dirty_price: f64,
    pub bid_price: f64,
    pub ask_price: f64,
    pub bid_ask_spread: f64,
    pub mid_price: f64,

    // Risk
    pub duration: f64,
    pub modified_duration: f64,
    pub macaulay_duration: f64,
    pub convexity: f64,
    pub dv01: f64,
    pub spread_to_benchmark: f64,
    pub z_spread: f64,
    pub issuer_default_probability: f64,
    pub recovery_rate: f64,

    // Position sizing
    pub quantity: i64,
    pub market_value: f64,
    pub unrealized_gain_loss: f64,
    pub cost_basis: f64,
    pub realized_gain_loss: f64,
    pub portfolio_weight: f64,

    // Optional features
    pub has_call_feature: bool,
    pub next_call_date: Option<NaiveDate>,
    pub call_price: Option<f64>,
    pub has_put_feature: bool,
    pub next_put_date: Option<NaiveDate>,
    pub put_price: Option<f64>,

    // Performance (percent)
    pub return_1d: f64,
    pub return_1w: f64,
    pub return_1m: f64,
    pub return_3m: f64,
    pub return_6m: f64,
    pub return_ytd: f64,
    pub return_1y: f64,

    // Metadata
    pub portfolio: String,
    pub data_source: String,
    pub pricing_source: String,
    pub custodian: String,
    pub confirmation_status: String,
    pub last_update: DateTime<Utc>,
}

/// An optional bond feature (call or put schedule).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EmbeddedOption {
    pub date: NaiveDate,
    pub price: f64,
}

/// Independent draws for one record.
#[derive(Debug, Clone)]
pub(crate) struct Primaries {
    pub instrument_type: &'static str,
    pub issuer: &'static str,
    pub sector: &'static str,
    pub seniority: &'static str,
    pub issue_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub coupon_rate: f64,
    pub coupon_frequency: &'static str,
    pub ytm: f64,
    pub currency: &'static str,
    pub country: &'static str,
    pub credit_rating: &'static str,
    pub rating_agency: &'static str,

    /// ISIN body after the country prefix
    pub isin_body: String,
    pub cusip: String,
    pub sedol: String,
    pub ticker: String,

    pub face_value: f64,
    pub clean_price: f64,
    pub accrued_interest: f64,
    /// Distance of the bid below the clean price
    pub bid_discount: f64,
    /// Distance of the ask above the bid
    pub ask_markup: f64,

    pub duration: f64,
    pub convexity: f64,
    pub spread_to_benchmark: f64,
    /// Basis-point noise between benchmark spread and z-spread
    pub z_spread_noise: f64,
    pub issuer_default_probability: f64,
    pub recovery_rate: f64,

    pub quantity: i64,
    /// Market value deviation from face × quantity
    pub deviation: f64,
    /// Unrealized P&L as a fraction of market value
    pub unrealized_ratio: f64,
    pub realized_gain_loss: f64,
    pub portfolio_weight: f64,

    pub call: Option<EmbeddedOption>,
    pub put: Option<EmbeddedOption>,

    pub returns: [f64; 7],

    pub portfolio: &'static str,
    pub data_source: &'static str,
    pub pricing_source: &'static str,
    pub custodian: &'static str,
    pub confirmation_status: &'static str,
}

impl Primaries {
    /// Draw every independent field of a record.
    ///
    /// `today` anchors the issue, maturity and call/put date windows.
    pub fn draw<R: Rng>(rng: &mut R, today: NaiveDate) -> Self {
        let instrument_type = *pick(rng, catalog::INSTRUMENT_TYPES);
        let issuer = *pick(rng, catalog::ISSUERS);
        let sector = *pick(rng, catalog::SECTORS);
        let seniority = *pick(rng, catalog::SENIORITIES);
        // Issue and maturity are anchored on today independently of each other
        let issue_date = date_in_past(rng, today, 20 * DAYS_PER_YEAR);
        let maturity_date = date_in_future(rng, today, 0, 30 * DAYS_PER_YEAR);
        let coupon_rate = float_range(rng, 0.5, 8.0, 2);
        let coupon_frequency = *pick(rng, catalog::COUPON_FREQUENCIES);
        let ytm = float_range(rng, 0.1, 10.0, 2);
        let currency = *pick(rng, catalog::CURRENCIES);
        let country = *pick(rng, catalog::COUNTRIES);
        let credit_rating = *pick(rng, catalog::CREDIT_RATINGS);
        let rating_agency = *pick(rng, catalog::RATING_AGENCIES);

        let isin_body = generate_pattern("{alnum:9}{digit:1}", rng);
        let cusip = generate_pattern("{alnum:9}", rng);
        let sedol = generate_pattern("{alnum:7}", rng);
        let ticker_len = rng.gen_range(3..=5);
        let ticker = generate_pattern(&format!("{{upper:{ticker_len}}}"), rng);

        let face_value = *pick(rng, catalog::FACE_VALUES);
        let clean_price = float_range(rng, 80.0, 120.0, 2);
        let accrued_interest = float_range(rng, 0.0, 3.0, 2);
        let bid_discount = float_range(rng, 0.01, 0.5, 2);
        let ask_markup = float_range(rng, 0.01, 0.5, 2);

        let duration = float_range(rng, 0.5, 25.0, 4);
        let convexity = float_range(rng, 0.1, 5.0, 4);
        let spread_to_benchmark = float_range(rng, 10.0, 800.0, 2);
        let z_spread_noise = symmetric(rng, 10.0, 2);
        let issuer_default_probability = float_range(rng, 0.0, 10.0, 4);
        let recovery_rate = float_range(rng, 20.0, 60.0, 2);

        let quantity = int_range(rng, 1_000, 1_000_000);
        let deviation = float_range(rng, 0.8, 1.2, 4);
        let unrealized_ratio = symmetric(rng, 0.1, 4);
        let realized_gain_loss = symmetric(rng, 50_000.0, 2);
        let portfolio_weight = float_range(rng, 0.0, 5.0, 4);

        let call = rng
            .gen_bool(CALL_FEATURE_PROBABILITY)
            .then(|| EmbeddedOption {
                date: date_in_future(rng, today, 30, 10 * DAYS_PER_YEAR),
                price: float_range(rng, 100.0, 105.0, 2),
            });
        let put = rng
            .gen_bool(PUT_FEATURE_PROBABILITY)
            .then(|| EmbeddedOption {
                date: date_in_future(rng, today, 30, 10 * DAYS_PER_YEAR),
                price: float_range(rng, 95.0, 100.0, 2),
            });

        let returns = catalog::RETURN_WINDOW_BOUNDS.map(|bound| symmetric(rng, bound, 2));

        Self {
            instrument_type,
            issuer,
            sector,
            seniority,
            issue_date,
            maturity_date,
            coupon_rate,
            coupon_frequency,
            ytm,
            currency,
            country,
            credit_rating,
            rating_agency,
            isin_body,
            cusip,
            sedol,
            ticker,
            face_value,
            clean_price,
            accrued_interest,
            bid_discount,
            ask_markup,
            duration,
            convexity,
            spread_to_benchmark,
            z_spread_noise,
            issuer_default_probability,
            recovery_rate,
            quantity,
            deviation,
            unrealized_ratio,
            realized_gain_loss,
            portfolio_weight,
            call,
            put,
            returns,
            portfolio: *pick(rng, catalog::PORTFOLIOS),
            data_source: *pick(rng, catalog::DATA_SOURCES),
            pricing_source: *pick(rng, catalog::PRICING_SOURCES),
            custodian: *pick(rng, catalog::CUSTODIANS),
            confirmation_status: *pick(rng, catalog::CONFIRMATION_STATUSES),
        }
    }
}

/// Fields computed from [`Primaries`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Derived {
    pub isin: String,
    pub dirty_price: f64,
    pub bid_price: f64,
    pub ask_price: f64,
    pub bid_ask_spread: f64,
    pub mid_price: f64,
    pub modified_duration: f64,
    pub macaulay_duration: f64,
    pub z_spread: f64,
    pub market_value: f64,
    pub unrealized_gain_loss: f64,
    pub cost_basis: f64,
    pub dv01: f64,
}

impl Derived {
    /// Compute every derived field. Each value only reads primaries or
    /// derived values assigned above it.
    pub fn compute(p: &Primaries) -> Self {
        let isin = format!("{}{}", p.country, p.isin_body);

        let dirty_price = p.clean_price + p.accrued_interest;
        let bid_price = round_to(p.clean_price - p.bid_discount, 2);
        let ask_price = round_to(bid_price + p.ask_markup, 2);
        let bid_ask_spread = round_to(ask_price - bid_price, 2);
        let mid_price = round_to((bid_price + ask_price) / 2.0, 3);

        let yield_factor = 1.0 + p.ytm / 100.0;
        let modified_duration = p.duration / yield_factor;
        let macaulay_duration = p.duration * yield_factor;

        let z_spread = p.spread_to_benchmark + p.z_spread_noise;

        let market_value = round_to(p.face_value * p.quantity as f64 * p.deviation, 2);
        let unrealized_gain_loss = round_to(market_value * p.unrealized_ratio, 2);
        let cost_basis = market_value - unrealized_gain_loss;
        let dv01 = modified_duration * market_value * 0.0001;

        Self {
            isin,
            dirty_price,
            bid_price,
            ask_price,
            bid_ask_spread,
            mid_price,
            modified_duration,
            macaulay_duration,
            z_spread,
            market_value,
            unrealized_gain_loss,
            cost_basis,
            dv01,
        }
    }
}

impl Position {
    /// Build a position from its drawn and derived parts.
    pub(crate) fn assemble(
        id: u64,
        p: Primaries,
        d: Derived,
        last_update: DateTime<Utc>,
    ) -> Self {
        let [return_1d, return_1w, return_1m, return_3m, return_6m, return_ytd, return_1y] =
            p.returns;

        Self {
            id,
            instrument_type: p.instrument_type.to_string(),
            issuer: p.issuer.to_string(),
            sector: p.sector.to_string(),
            seniority: p.seniority.to_string(),
            issue_date: p.issue_date,
            maturity_date: p.maturity_date,
            coupon_rate: p.coupon_rate,
            coupon_frequency: p.coupon_frequency.to_string(),
            ytm: p.ytm,
            currency: p.currency.to_string(),
            country: p.country.to_string(),
            credit_rating: p.credit_rating.to_string(),
            rating_agency: p.rating_agency.to_string(),
            isin: d.isin,
            cusip: p.cusip,
            sedol: p.sedol,
            ticker: p.ticker,
            face_value: p.face_value,
            clean_price: p.clean_price,
            accrued_interest: p.accrued_interest,
            dirty_price: d.dirty_price,
            bid_price: d.bid_price,
            ask_price: d.ask_price,
            bid_ask_spread: d.bid_ask_spread,
            mid_price: d.mid_price,
            duration: p.duration,
            modified_duration: d.modified_duration,
            macaulay_duration: d.macaulay_duration,
            convexity: p.convexity,
            dv01: d.dv01,
            spread_to_benchmark: p.spread_to_benchmark,
            z_spread: d.z_spread,
            issuer_default_probability: p.issuer_default_probability,
            recovery_rate: p.recovery_rate,
            quantity: p.quantity,
            market_value: d.market_value,
            unrealized_gain_loss: d.unrealized_gain_loss,
            cost_basis: d.cost_basis,
            realized_gain_loss: p.realized_gain_loss,
            portfolio_weight: p.portfolio_weight,
            has_call_feature: p.call.is_some(),
            next_call_date: p.call.map(|c| c.date),
            call_price: p.call.map(|c| c.price),
            has_put_feature: p.put.is_some(),
            next_put_date: p.put.map(|o| o.date),
            put_price: p.put.map(|o| o.price),
            return_1d,
            return_1w,
            return_1m,
            return_3m,
            return_6m,
            return_ytd,
            return_1y,
            portfolio: p.portfolio.to_string(),
            data_source: p.data_source.to_string(),
            pricing_source: p.pricing_source.to_string(),
            custodian: p.custodian.to_string(),
            confirmation_status: p.confirmation_status.to_string(),
            last_update,
        }
    }

    /// Draw one complete record.
    pub(crate) fn draw<R: Rng>(rng: &mut R, id: u64, last_update: DateTime<Utc>) -> Self {
        let primaries = Primaries::draw(rng, last_update.date_naive());
        let derived = Derived::compute(&primaries);
        Self::assemble(id, primaries, derived, last_update)
    }

    /// Convert this record into a loosely typed [`Row`] (keys as serialized).
    pub fn to_row(&self) -> Result<Row, GeneratorError> {
        let value = serde_json::to_value(self)?;
        Ok(Row::try_from(value)?)
    }
}

/// Convert a batch of positions into rows, preserving order.
pub fn positions_to_rows(positions: &[Position]) -> Result<Vec<Row>, GeneratorError> {
    positions.iter().map(Position::to_row).collect()
}
