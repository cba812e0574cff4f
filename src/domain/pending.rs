use super::transfer::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTransfersVariables {
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PendingBeneficiary {
    pub name: String,
    pub iban: String,
}

/// A transfer demand waiting for the user to initiate it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTransfer {
    pub id: String,
    pub amount: Amount,
    pub created_at: DateTime<Utc>,
    pub beneficiary: PendingBeneficiary,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionEdge {
    pub node: PendingTransfer,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionConnection {
    #[serde(default)]
    pub page_info: PageInfo,
    pub edges: Vec<TransactionEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PendingAccount {
    pub id: String,
    pub name: String,
    pub transactions: TransactionConnection,
}

/// `data` of the pending transfers query. `account` is null when the caller
/// has no access to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PendingTransfersData {
    pub account: Option<PendingAccount>,
}

impl PendingTransfersData {
    pub fn transfers(&self) -> impl Iterator<Item = &PendingTransfer> {
        self.account
            .iter()
            .flat_map(|account| account.transactions.edges.iter().map(|edge| &edge.node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_decode_transaction_edges() {
        let data: PendingTransfersData = serde_json::from_value(json!({
            "account": {
                "id": "acc-1",
                "name": "Main",
                "transactions": {
                    "pageInfo": { "endCursor": null, "hasNextPage": false },
                    "edges": [{
                        "node": {
                            "id": "tx-1",
                            "amount": { "value": "50.00", "currency": "EUR" },
                            "createdAt": "2025-01-08T12:47:44.170Z",
                            "beneficiary": { "name": "ERIKA", "iban": "ES6411112222008763481670" }
                        }
                    }]
                }
            }
        }))
        .unwrap();

        let transfers: Vec<_> = data.transfers().collect();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].amount.value, dec!(50.00));
        assert_eq!(transfers[0].beneficiary.name, "ERIKA");
    }

    #[test]
    fn test_missing_account_has_no_transfers() {
        let data: PendingTransfersData = serde_json::from_value(json!({ "account": null })).unwrap();
        assert_eq!(data.transfers().count(), 0);
    }
}
