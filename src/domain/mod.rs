//! Domain types of the transfer flow and the ports it talks through.

pub mod async_data;
pub mod batch;
pub mod deferred;
pub mod notification;
pub mod payment;
pub mod pending;
pub mod ports;
pub mod route;
pub mod transfer;
