//! Flat-rate expense deduction ("paušální výdaje").
//!
//! Instead of itemizing costs, an OSVČ may deduct a statutory percentage of
//! gross income. The percentage depends on the trade classification:
//!
//! | Trade classification      | Expense rate |
//! |---------------------------|--------------|
//! | Craft trade               | 80%          |
//! | Agricultural production   | 80%          |
//! | Free trade                | 60%          |
//! | Other / not stated        | 60%          |
//!
//! A missing or unrecognised classification is not an error; it falls back
//! to the 60% free-trade rate, because the invoicing front end allows the
//! field to be left blank.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TradeType;

/// Expense rate for craft trades and agricultural production.
pub const CRAFT_AND_AGRICULTURAL_RATE: Decimal = dec!(0.80);

/// Expense rate for free trades; also the fallback for an absent or unknown
/// classification.
pub const FREE_TRADE_RATE: Decimal = dec!(0.60);

/// Maps a trade classification to its flat expense rate.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use osvc_core::TradeType;
/// use osvc_core::calculations::expense;
///
/// assert_eq!(expense::rate_for(Some(TradeType::Craft)), dec!(0.80));
/// assert_eq!(expense::rate_for(Some(TradeType::Free)), dec!(0.60));
/// assert_eq!(expense::rate_for(None), dec!(0.60));
/// ```
pub fn rate_for(trade_type: Option<TradeType>) -> Decimal {
    match trade_type {
        Some(TradeType::Craft) | Some(TradeType::Agricultural) => CRAFT_AND_AGRICULTURAL_RATE,
        Some(TradeType::Free) | Some(TradeType::Other) | None => FREE_TRADE_RATE,
    }
}

/// Taxable base after the flat expense deduction: income × (1 − rate).
///
/// No rounding happens here; the engine rounds once when assembling the
/// final result.
pub fn taxable_base(
    annual_income: Decimal,
    expense_rate: Decimal,
) -> Decimal {
    annual_income * (Decimal::ONE - expense_rate)
}
