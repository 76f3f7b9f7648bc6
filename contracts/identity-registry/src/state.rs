use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct IdentityRecord {
    /// Decentralized identifier (opaque, non-empty)
    pub did: String,
    /// Hash of the off-chain metadata document
    pub metadata_hash: String,
    /// Block height at registration
    pub created_at: u64,
}

/// Current admin
pub const ADMIN: Item<Addr> = Item::new("admin");

/// Identity records indexed by owner address
pub const IDENTITIES: Map<&Addr, IdentityRecord> = Map::new("identities");

/// Activity flags, written together with the identity record
pub const STATUS: Map<&Addr, bool> = Map::new("status");

/// Alias to owner address (last writer wins)
pub const ALIASES: Map<&str, Addr> = Map::new("aliases");
