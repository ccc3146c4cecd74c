use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::agreements::Agreement;
use crate::constants::TERMINATION_FEE_RATE;
use crate::i18n::{format_money, translate_with, Locale};

/// Figures shown to the operator before confirming. Computing one never
/// touches the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TerminationQuote {
    pub agreement_id: String,
    pub customer_id: String,
    pub strategy_name: String,
    pub amount: Decimal,
    pub fee: Decimal,
    pub net: Decimal,
}

impl TerminationQuote {
    pub fn for_agreement(agreement: &Agreement) -> Self {
        let fee = agreement.amount * TERMINATION_FEE_RATE;
        Self {
            agreement_id: agreement.id.clone(),
            customer_id: agreement.customer_id.clone(),
            strategy_name: agreement.strategy_name.clone(),
            amount: agreement.amount,
            fee,
            net: agreement.amount - fee,
        }
    }
}

/// Outcome of a settled termination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TerminationReceipt {
    pub agreement_id: String,
    pub fee: Decimal,
    pub net: Decimal,
    /// Id of the TERMINATION audit record appended to the queue
    pub request_id: String,
    pub balance_after: Decimal,
}

impl TerminationReceipt {
    /// Confirmation line shown after settlement.
    pub fn notice(&self, locale: Locale) -> String {
        translate_with(
            locale,
            "termination_notice",
            &[
                ("id", self.agreement_id.clone()),
                ("fee", format_money(self.fee)),
                ("net", format_money(self.net)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agreements::AgreementStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_fee_is_one_tenth_percent() {
        let agreement = Agreement {
            id: "WA-0900".to_string(),
            customer_id: "C001".to_string(),
            strategy_name: "Aggressive Alpha A1".to_string(),
            sign_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: AgreementStatus::Signed,
            amount: dec!(200000),
        };
        let quote = TerminationQuote::for_agreement(&agreement);
        assert_eq!(quote.fee, dec!(200));
        assert_eq!(quote.net, dec!(199800));
    }

    #[test]
    fn test_receipt_notice() {
        let receipt = TerminationReceipt {
            agreement_id: "WA-0856".to_string(),
            fee: dec!(1250),
            net: dec!(1248750),
            request_id: "TM-20240317-008".to_string(),
            balance_after: dec!(1248750),
        };
        assert_eq!(
            receipt.notice(Locale::En),
            "Agreement WA-0856 terminated: fee ¥1,250 deducted, net ¥1,248,750."
        );
    }
}
