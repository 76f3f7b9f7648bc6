// Shared types and utilities for the identity registry contracts

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

/// Stable numeric tags surfaced to clients for rejected registry calls.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum ErrorCode {
    NotAuthorized,
    AlreadyRegistered,
    NotFound,
    InvalidInput,
}

impl ErrorCode {
    pub fn code(self) -> u32 {
        match self {
            ErrorCode::NotAuthorized => 100,
            ErrorCode::AlreadyRegistered => 101,
            ErrorCode::NotFound => 102,
            ErrorCode::InvalidInput => 103,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            100 => Some(ErrorCode::NotAuthorized),
            101 => Some(ErrorCode::AlreadyRegistered),
            102 => Some(ErrorCode::NotFound),
            103 => Some(ErrorCode::InvalidInput),
            _ => None,
        }
    }
}

// Common helper functions

/// Admin identity is a plain comparison; authentication happens upstream.
pub fn is_admin(admin: &Addr, caller: &Addr) -> bool {
    admin == caller
}
