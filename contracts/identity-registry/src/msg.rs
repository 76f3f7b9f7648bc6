use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::state::IdentityRecord;

#[cw_serde]
pub struct InstantiateMsg {
    /// Genesis admin, defaults to the deployer
    pub admin: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register the sender's identity
    RegisterIdentity { did: String, metadata_hash: String },
    /// Replace the sender's metadata hash
    UpdateMetadata { metadata_hash: String },
    /// Mark an identity inactive (admin only)
    DeactivateIdentity { identity: String },
    /// Mark an identity active (admin only)
    ActivateIdentity { identity: String },
    /// Bind an alias to the sender
    AddAlias { alias: String },
    /// Hand the admin role to another address (admin only)
    TransferAdmin { new_admin: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get identity record by owner
    #[returns(IdentityResponse)]
    GetIdentity { owner: String },

    /// Check whether an identity is active
    #[returns(ActiveResponse)]
    IsIdentityActive { owner: String },

    /// Resolve alias to owner
    #[returns(AliasOwnerResponse)]
    GetAliasOwner { alias: String },

    /// Get current admin
    #[returns(AdminResponse)]
    GetAdmin {},
}

#[cw_serde]
pub struct MigrateMsg {}

// Response types

#[cw_serde]
pub struct IdentityResponse {
    pub identity: Option<IdentityRecord>,
}

#[cw_serde]
pub struct ActiveResponse {
    pub active: bool,
}

#[cw_serde]
pub struct AliasOwnerResponse {
    pub owner: Option<Addr>,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: Addr,
}
