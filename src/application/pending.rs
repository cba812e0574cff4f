use super::orchestrator::{Settlement, TransferConsentOrchestrator};
use super::query::Query;
use crate::domain::async_data::{AsyncData, AsyncResult};
use crate::domain::pending::{PendingTransfer, PendingTransfersData, PendingTransfersVariables};
use crate::domain::ports::{ErrorTranslator, ErrorTranslatorHandle, QueryClientHandle};
use crate::domain::transfer::TransferDraft;
use crate::error::{ErrorKind, Result, TransferError};
use std::sync::Arc;
use tracing::info;

/// One row of the pending demands list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRow {
    pub id: String,
    pub beneficiary_name: String,
    pub amount_label: String,
    pub iban: String,
    pub created_at: String,
}

impl From<&PendingTransfer> for PendingRow {
    fn from(transfer: &PendingTransfer) -> Self {
        Self {
            id: transfer.id.clone(),
            beneficiary_name: transfer.beneficiary.name.clone(),
            amount_label: transfer.amount.to_string(),
            iban: format_iban(&transfer.beneficiary.iban),
            created_at: transfer.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// What the pending demands list shows for a given query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingListView {
    Placeholder,
    Error(String),
    NotFound,
    Empty,
    Rows(Vec<PendingRow>),
}

impl PendingListView {
    /// Pure function of the query state: the same state always renders the same view.
    pub fn render(
        data: &AsyncResult<PendingTransfersData, ErrorKind>,
        translator: &dyn ErrorTranslator,
    ) -> Self {
        match data {
            AsyncData::NotAsked | AsyncData::Loading => PendingListView::Placeholder,
            AsyncData::Done(Err(err)) => PendingListView::Error(translator.translate(err)),
            AsyncData::Done(Ok(PendingTransfersData { account: None })) => {
                PendingListView::NotFound
            }
            AsyncData::Done(Ok(data)) => {
                let rows: Vec<PendingRow> = data.transfers().map(PendingRow::from).collect();
                if rows.is_empty() {
                    PendingListView::Empty
                } else {
                    PendingListView::Rows(rows)
                }
            }
        }
    }
}

/// Prints an IBAN in groups of four characters.
pub fn format_iban(iban: &str) -> String {
    let compact: Vec<char> = iban
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    compact
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Binds the pending demands query of one account to the transfer flow.
pub struct PendingDemands {
    account_id: String,
    account_membership_id: String,
    query: Query<PendingTransfersVariables, PendingTransfersData>,
    orchestrator: Arc<TransferConsentOrchestrator>,
    translator: ErrorTranslatorHandle,
}

impl PendingDemands {
    pub fn new(
        account_id: impl Into<String>,
        account_membership_id: impl Into<String>,
        client: QueryClientHandle<PendingTransfersVariables, PendingTransfersData>,
        orchestrator: Arc<TransferConsentOrchestrator>,
        translator: ErrorTranslatorHandle,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            account_membership_id: account_membership_id.into(),
            query: Query::new(client),
            orchestrator,
            translator,
        }
    }

    pub async fn load(&self) -> AsyncResult<PendingTransfersData, ErrorKind> {
        self.query
            .run(PendingTransfersVariables {
                account_id: self.account_id.clone(),
            })
            .await
    }

    pub fn view(&self) -> PendingListView {
        PendingListView::render(&self.query.current(), self.translator.as_ref())
    }

    pub fn can_initiate(&self) -> bool {
        self.orchestrator.is_submit_enabled()
    }

    /// Submits the pending transfer `transfer_id` from the loaded list.
    pub async fn initiate(&self, transfer_id: &str) -> Result<Settlement> {
        let data = match self.query.current() {
            AsyncData::Done(Ok(data)) => data,
            AsyncData::NotAsked | AsyncData::Loading | AsyncData::Done(Err(_)) => {
                return Err(TransferError::NotLoaded);
            }
        };
        let transfer = data
            .transfers()
            .find(|t| t.id == transfer_id)
            .ok_or_else(|| TransferError::UnknownRow(transfer_id.to_string()))?;

        info!(transfer_id, beneficiary = %transfer.beneficiary.name, "Initiating pending transfer");
        let draft = TransferDraft {
            account_id: self.account_id.clone(),
            account_membership_id: self.account_membership_id.clone(),
            amount: transfer.amount.value,
            currency: transfer.amount.currency.clone(),
            beneficiary_name: transfer.beneficiary.name.clone(),
            iban: transfer.beneficiary.iban.clone(),
        };
        Ok(self.orchestrator.submit(draft).await)
    }
}
