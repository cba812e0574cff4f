//! Application layer: the transfer consent flow and the bindings around it.
//!
//! `TransferConsentOrchestrator` submits a transfer and resolves it to one
//! user-visible effect. `Query` is the observable lifecycle cell for reads,
//! and `PendingDemands` ties the pending transfers list to the orchestrator.

pub mod orchestrator;
pub mod pending;
pub mod query;
