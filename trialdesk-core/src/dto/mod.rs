//! Data Transfer Objects for the TrialDesk REST backend
//!
//! Each resource has three shapes:
//! - `*ResponseDto`: the authoritative record returned by the backend
//! - `Create*Dto`: the body of a create request, never carrying an id
//! - `Update*Dto`: a partial patch; unset fields are left out of the JSON body
//!
//! Field names are camelCase on the wire.

pub mod client;
pub mod irt;
pub mod study;
pub mod trial_manager;

pub use client::{ClientResponseDto, CreateClientDto, UpdateClientDto};
pub use irt::{CreateIrtDto, IrtResponseDto, UpdateIrtDto};
pub use study::{CreateStudyDto, StudyResponseDto, UpdateStudyDto};
pub use trial_manager::{CreateTrialManagerDto, TrialManagerResponseDto, UpdateTrialManagerDto};
