use cosmwasm_std::StdError;
use shared::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    NotAuthorized {},

    #[error("Identity already registered")]
    AlreadyRegistered {},

    #[error("Identity not found")]
    NotFound {},

    #[error("Invalid input: DID must not be empty")]
    InvalidInput {},

    #[error("Cannot migrate from {contract} {version}")]
    CannotMigrate { contract: String, version: String },
}

impl ContractError {
    /// Registry error code, `None` for storage and migration failures.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ContractError::NotAuthorized {} => Some(ErrorCode::NotAuthorized),
            ContractError::AlreadyRegistered {} => Some(ErrorCode::AlreadyRegistered),
            ContractError::NotFound {} => Some(ErrorCode::NotFound),
            ContractError::InvalidInput {} => Some(ErrorCode::InvalidInput),
            ContractError::Std(_) | ContractError::CannotMigrate { .. } => None,
        }
    }
}
