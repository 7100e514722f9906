//! TrialDesk Core
//!
//! Wire types shared by the TrialDesk API client and CLI.
//!
//! This crate contains:
//! - DTOs: request and response bodies for the Client, Study, IRT and
//!   TrialManager resources of the TrialDesk REST backend

pub mod dto;
