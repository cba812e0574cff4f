#![allow(dead_code)]

use rust_decimal_macros::dec;
use std::sync::Arc;
use transfer_consent::application::orchestrator::TransferConsentOrchestrator;
use transfer_consent::config::ConsentMessages;
use transfer_consent::domain::payment::{
    Consent, CreditTransferPayload, InitiateCreditTransfersData, Payment, PaymentStatusInfo,
};
use transfer_consent::domain::transfer::TransferDraft;
use transfer_consent::infrastructure::i18n::MessageTranslator;
use transfer_consent::infrastructure::in_memory::{
    RecordingNavigator, RecordingNotifier, ScriptedMutation,
};

pub const ORIGIN: &str = "https://bank.example";
pub const IBAN: &str = "ES6411112222008763481670";

pub struct Harness {
    pub orchestrator: Arc<TransferConsentOrchestrator>,
    pub mutation: Arc<ScriptedMutation>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub translator: Arc<MessageTranslator>,
}

pub fn harness() -> Harness {
    let messages = ConsentMessages::default();
    let mutation = Arc::new(ScriptedMutation::new());
    let navigator = Arc::new(RecordingNavigator::new(ORIGIN));
    let notifier = Arc::new(RecordingNotifier::new());
    let translator = Arc::new(MessageTranslator::new(messages.clone()));
    let orchestrator = Arc::new(TransferConsentOrchestrator::new(
        mutation.clone(),
        navigator.clone(),
        notifier.clone(),
        translator.clone(),
        messages,
    ));
    Harness {
        orchestrator,
        mutation,
        navigator,
        notifier,
        translator,
    }
}

pub fn draft() -> TransferDraft {
    TransferDraft {
        account_id: "acc-1".to_string(),
        account_membership_id: "mem-1".to_string(),
        amount: dec!(50.00),
        currency: "EUR".to_string(),
        beneficiary_name: "ERIKA".to_string(),
        iban: IBAN.to_string(),
    }
}

pub fn success(payment_id: &str, status_info: PaymentStatusInfo) -> InitiateCreditTransfersData {
    InitiateCreditTransfersData {
        payloads: vec![CreditTransferPayload::InitiateCreditTransfersSuccessPayload {
            payment: Payment {
                id: payment_id.to_string(),
                status_info,
            },
        }],
    }
}

pub fn initiated(payment_id: &str) -> InitiateCreditTransfersData {
    success(payment_id, PaymentStatusInfo::PaymentInitiated {})
}

pub fn rejected(payment_id: &str) -> InitiateCreditTransfersData {
    success(payment_id, PaymentStatusInfo::PaymentRejected { reason: None })
}

pub fn consent_pending(payment_id: &str, consent_url: &str) -> InitiateCreditTransfersData {
    success(
        payment_id,
        PaymentStatusInfo::PaymentConsentPending {
            consent: Consent {
                consent_url: consent_url.to_string(),
            },
        },
    )
}
