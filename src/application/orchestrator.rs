use crate::config::ConsentMessages;
use crate::domain::batch::collapse;
use crate::domain::notification::Notification;
use crate::domain::payment::{InitiateCreditTransfersData, Payment, PaymentOutcome};
use crate::domain::ports::{
    ErrorTranslatorHandle, NavigatorHandle, NotifierHandle, TransferMutationHandle,
};
use crate::domain::route::Route;
use crate::domain::transfer::{TransferDraft, TransferRequest};
use crate::error::ErrorKind;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{debug, error, info, warn};

/// Which path a submission ended on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Initiated {
        payment_id: String,
    },
    Rejected {
        payment_id: String,
        reason: Option<String>,
    },
    /// The browser was sent to the bank's consent page. Nothing local follows.
    ConsentHandoff {
        payment_id: String,
        consent_url: String,
    },
    Failed(ErrorKind),
}

/// Counts a submission as in flight until dropped, including when the
/// `submit` future is cancelled before it settles.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Submits credit transfers and turns their outcome into exactly one effect.
///
/// The notification and navigation surfaces are injected; concurrent
/// submissions are not de-duplicated and each fires its own effects.
pub struct TransferConsentOrchestrator {
    mutation: TransferMutationHandle,
    navigator: NavigatorHandle,
    notifier: NotifierHandle,
    translator: ErrorTranslatorHandle,
    messages: ConsentMessages,
    in_flight: AtomicUsize,
    handed_off: AtomicBool,
}

impl TransferConsentOrchestrator {
    pub fn new(
        mutation: TransferMutationHandle,
        navigator: NavigatorHandle,
        notifier: NotifierHandle,
        translator: ErrorTranslatorHandle,
        messages: ConsentMessages,
    ) -> Self {
        Self {
            mutation,
            navigator,
            notifier,
            translator,
            messages,
            in_flight: AtomicUsize::new(0),
            handed_off: AtomicBool::new(false),
        }
    }

    /// Builds the mutation input. Consent comes back to the payments page of
    /// the membership.
    pub fn build_request(&self, draft: TransferDraft) -> TransferRequest {
        let redirect = Route::AccountPaymentsRoot {
            account_membership_id: draft.account_membership_id.clone(),
        }
        .absolute(&self.navigator.origin());
        draft.into_request(redirect)
    }

    /// Whether the submit control should accept input.
    ///
    /// Disabled while a submission is in flight, and for good once the user
    /// has been handed off to the consent page.
    pub fn is_submit_enabled(&self) -> bool {
        !self.handed_off.load(Ordering::SeqCst) && self.in_flight.load(Ordering::SeqCst) == 0
    }

    pub async fn submit(&self, draft: TransferDraft) -> Settlement {
        let account_membership_id = draft.account_membership_id.clone();
        let request = self.build_request(draft);
        info!(
            account_id = %request.account_id,
            redirect = %request.consent_redirect_url,
            "Initiating credit transfer"
        );

        let _in_flight = InFlight::enter(&self.in_flight);
        let result = self
            .mutation
            .initiate_credit_transfers(request)
            .map_ok(InitiateCreditTransfersData::into_results)
            .and_then_result(collapse::<Payment>)
            .map_ok(PaymentOutcome::from)
            .tap_ok(|outcome| debug!(payment_id = outcome.payment_id(), "Mutation settled"))
            .tap_error(|err| debug!(error = %err, "Mutation failed"))
            .await;

        match result {
            Ok(outcome) => self.dispatch(outcome, &account_membership_id),
            Err(err) => self.report_error(err),
        }
    }

    fn dispatch(&self, outcome: PaymentOutcome, account_membership_id: &str) -> Settlement {
        match outcome {
            PaymentOutcome::PaymentInitiated { payment_id } => {
                info!(%payment_id, "Payment initiated");
                self.notifier.show(
                    Notification::success(&self.messages.success_title)
                        .with_description(&self.messages.success_description)
                        .sticky(),
                );
                self.navigator.replace(Route::AccountTransactionsListRoot {
                    account_membership_id: account_membership_id.to_string(),
                    payment_id: Some(payment_id.clone()),
                });
                Settlement::Initiated { payment_id }
            }
            PaymentOutcome::PaymentRejected { payment_id, reason } => {
                warn!(%payment_id, reason = reason.as_deref().unwrap_or(""), "Payment rejected");
                self.notifier.show(
                    Notification::error(&self.messages.rejected_title)
                        .with_description(&self.messages.rejected_description),
                );
                Settlement::Rejected { payment_id, reason }
            }
            PaymentOutcome::PaymentConsentPending {
                payment_id,
                consent,
            } => {
                info!(%payment_id, consent_url = %consent.consent_url, "Handing off to consent");
                self.handed_off.store(true, Ordering::SeqCst);
                self.navigator.assign(&consent.consent_url);
                Settlement::ConsentHandoff {
                    payment_id,
                    consent_url: consent.consent_url,
                }
            }
        }
    }

    fn report_error(&self, err: ErrorKind) -> Settlement {
        match &err {
            ErrorKind::InvalidResponse(detail) => {
                error!(%detail, "Unhandled credit transfer response")
            }
            _ => warn!(code = err.code(), error = %err, "Credit transfer failed"),
        }
        self.notifier.show(
            Notification::error(self.translator.translate(&err))
                .with_description(err.to_string())
                .with_error(err.clone()),
        );
        Settlement::Failed(err)
    }
}
