//! モデルモジュール

mod request;
mod response;

pub use request::SilabasRequest;
pub use response::{DecisionDto, SilabasResponse};
