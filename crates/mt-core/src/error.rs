use thiserror::Error;

pub type MtResult<T> = Result<T, MtError>;

#[derive(Error, Debug)]
pub enum MtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}
