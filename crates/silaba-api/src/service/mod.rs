//! Service module

mod silaba_api_service;

pub use silaba_api_service::{SilabaApiService, SilabaApiServiceFull};
