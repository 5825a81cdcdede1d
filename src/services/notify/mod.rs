//! Outbound order collaborators. Each returns a plain success flag; failures
//! are logged here and never panic or propagate, since the caller decides
//! which collaborators are allowed to fail an order.

pub mod airtable;
pub mod email;
pub mod telegram;
