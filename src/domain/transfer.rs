use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amount as the backend expects it: a decimal string and an ISO-4217 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: Decimal,
    pub currency: String,
}

impl Amount {
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TransferMode {
    Regular,
    Instant,
    #[default]
    InstantWithFallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SepaBeneficiary {
    pub name: String,
    pub iban: String,
    pub is_my_own_iban: bool,
    pub save: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditTransferInput {
    pub amount: Amount,
    pub mode: TransferMode,
    pub sepa_beneficiary: SepaBeneficiary,
}

/// Variables of the `initiateCreditTransfers` mutation.
///
/// Built fresh for every submission and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub account_id: String,
    pub consent_redirect_url: String,
    pub credit_transfers: Vec<CreditTransferInput>,
}

/// What the user asked for: one transfer out of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferDraft {
    pub account_id: String,
    pub account_membership_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub beneficiary_name: String,
    pub iban: String,
}

impl TransferDraft {
    /// Expands the draft into the single-item mutation input.
    ///
    /// Transfers always go out as `InstantWithFallback` to a beneficiary that
    /// is neither saved nor flagged as the user's own IBAN.
    pub fn into_request(self, consent_redirect_url: String) -> TransferRequest {
        TransferRequest {
            account_id: self.account_id,
            consent_redirect_url,
            credit_transfers: vec![CreditTransferInput {
                amount: Amount::new(self.amount, self.currency),
                mode: TransferMode::InstantWithFallback,
                sepa_beneficiary: SepaBeneficiary {
                    name: self.beneficiary_name,
                    iban: self.iban,
                    is_my_own_iban: false,
                    save: false,
                },
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn draft() -> TransferDraft {
        TransferDraft {
            account_id: "acc-1".to_string(),
            account_membership_id: "mem-1".to_string(),
            amount: dec!(50.00),
            currency: "EUR".to_string(),
            beneficiary_name: "ERIKA".to_string(),
            iban: "ES6411112222008763481670".to_string(),
        }
    }

    #[test]
    fn test_into_request_fixed_fields() {
        let request = draft().into_request("https://bank.example/mem-1/payments".to_string());

        assert_eq!(request.credit_transfers.len(), 1);
        let transfer = &request.credit_transfers[0];
        assert_eq!(transfer.mode, TransferMode::InstantWithFallback);
        assert!(!transfer.sepa_beneficiary.save);
        assert!(!transfer.sepa_beneficiary.is_my_own_iban);
        assert_eq!(transfer.amount, Amount::new(dec!(50.00), "EUR"));
    }

    #[test]
    fn test_request_serializes_to_graphql_variables() {
        let request = draft().into_request("https://bank.example/mem-1/payments".to_string());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "accountId": "acc-1",
                "consentRedirectUrl": "https://bank.example/mem-1/payments",
                "creditTransfers": [{
                    "amount": { "value": "50.00", "currency": "EUR" },
                    "mode": "InstantWithFallback",
                    "sepaBeneficiary": {
                        "name": "ERIKA",
                        "iban": "ES6411112222008763481670",
                        "isMyOwnIban": false,
                        "save": false
                    }
                }]
            })
        );
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::new(dec!(1000.00), "EUR").to_string(), "1000.00 EUR");
    }
}
