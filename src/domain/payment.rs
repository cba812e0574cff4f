use crate::error::ErrorKind;
use serde::de;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    pub consent_url: String,
}

/// `statusInfo` of a payment as the backend sends it, tagged by `__typename`.
///
/// Any other tag fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum PaymentStatusInfo {
    PaymentInitiated {},
    PaymentRejected {
        #[serde(default)]
        reason: Option<String>,
    },
    PaymentConsentPending {
        consent: Consent,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub status_info: PaymentStatusInfo,
}

/// Terminal result of a submitted transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Accepted and executing.
    PaymentInitiated { payment_id: String },
    /// Declined by the bank. A business outcome, not an error.
    PaymentRejected {
        payment_id: String,
        reason: Option<String>,
    },
    /// Strong customer authentication has to happen outside the dashboard.
    PaymentConsentPending { payment_id: String, consent: Consent },
}

impl PaymentOutcome {
    pub fn payment_id(&self) -> &str {
        match self {
            PaymentOutcome::PaymentInitiated { payment_id }
            | PaymentOutcome::PaymentRejected { payment_id, .. }
            | PaymentOutcome::PaymentConsentPending { payment_id, .. } => payment_id,
        }
    }
}

impl From<Payment> for PaymentOutcome {
    fn from(payment: Payment) -> Self {
        let payment_id = payment.id;
        match payment.status_info {
            PaymentStatusInfo::PaymentInitiated {} => PaymentOutcome::PaymentInitiated { payment_id },
            PaymentStatusInfo::PaymentRejected { reason } => {
                PaymentOutcome::PaymentRejected { payment_id, reason }
            }
            PaymentStatusInfo::PaymentConsentPending { consent } => {
                PaymentOutcome::PaymentConsentPending {
                    payment_id,
                    consent,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rejection {
    #[serde(default)]
    pub message: String,
}

/// One item of the `initiateCreditTransfers` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum CreditTransferPayload {
    InitiateCreditTransfersSuccessPayload { payment: Payment },
    AccountNotFoundRejection(Rejection),
    ForbiddenRejection(Rejection),
    ValidationRejection(Rejection),
    InternalErrorRejection(Rejection),
}

impl CreditTransferPayload {
    pub fn into_result(self) -> Result<Payment, ErrorKind> {
        let (typename, rejection) = match self {
            CreditTransferPayload::InitiateCreditTransfersSuccessPayload { payment } => {
                return Ok(payment);
            }
            CreditTransferPayload::AccountNotFoundRejection(r) => ("AccountNotFoundRejection", r),
            CreditTransferPayload::ForbiddenRejection(r) => ("ForbiddenRejection", r),
            CreditTransferPayload::ValidationRejection(r) => ("ValidationRejection", r),
            CreditTransferPayload::InternalErrorRejection(r) => ("InternalErrorRejection", r),
        };
        Err(ErrorKind::Rejection {
            typename: typename.to_string(),
            message: rejection.message,
        })
    }
}

/// `data` of the mutation response.
///
/// The backend answers with a single payload object; batch-shaped transports
/// send a list. Both decode to a list in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InitiateCreditTransfersData {
    #[serde(rename = "initiateCreditTransfers", deserialize_with = "one_or_many")]
    pub payloads: Vec<CreditTransferPayload>,
}

impl InitiateCreditTransfersData {
    pub fn into_results(self) -> Vec<Result<Payment, ErrorKind>> {
        self.payloads
            .into_iter()
            .map(CreditTransferPayload::into_result)
            .collect()
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<CreditTransferPayload>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        items @ Value::Array(_) => serde_json::from_value(items).map_err(de::Error::custom),
        item => serde_json::from_value(item)
            .map(|payload| vec![payload])
            .map_err(de::Error::custom),
    }
}
