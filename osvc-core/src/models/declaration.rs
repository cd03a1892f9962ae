use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::trade_type::TradeType;

/// A year's worth of self-employment income, as declared by the filer.
///
/// `trade_type` is optional on purpose: the invoicing front end lets users
/// leave their trade classification blank, and an absent classification is
/// treated as a free trade rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeDeclaration {
    pub annual_income: Decimal,
    pub trade_type: Option<TradeType>,
}

impl IncomeDeclaration {
    pub fn new(annual_income: Decimal, trade_type: Option<TradeType>) -> Self {
        Self {
            annual_income,
            trade_type,
        }
    }
}

/// The raw request shape the web API accepts.
///
/// Income arrives as a JSON number and the trade classification as a free
/// string; both are checked and converted at the engine boundary. `user_type`
/// is carried for the API layer's account gating and has no effect on the
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub annual_income: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn request_deserializes_with_optional_fields_absent() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{"annualIncome": 500000}"#).unwrap();

        assert_eq!(request.annual_income, 500000.0);
        assert_eq!(request.trade_type, None);
        assert_eq!(request.user_type, None);
    }

    #[test]
    fn request_deserializes_with_all_fields() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{"annualIncome": 1500000, "tradeType": "craft", "userType": "selfEmployed"}"#,
        )
        .unwrap();

        assert_eq!(request.annual_income, 1500000.0);
        assert_eq!(request.trade_type.as_deref(), Some("craft"));
        assert_eq!(request.user_type.as_deref(), Some("selfEmployed"));
    }

    #[test]
    fn request_keeps_unrecognised_trade_strings_verbatim() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{"annualIncome": 0, "tradeType": "consulting"}"#).unwrap();

        assert_eq!(request.trade_type.as_deref(), Some("consulting"));
    }
}
