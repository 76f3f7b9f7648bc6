use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;
use shared::is_admin;

use crate::error::ContractError;
use crate::msg::{
    ActiveResponse, AdminResponse, AliasOwnerResponse, ExecuteMsg, IdentityResponse,
    InstantiateMsg, MigrateMsg, QueryMsg,
};
use crate::state::{IdentityRecord, ADMIN, ALIASES, IDENTITIES, STATUS};

const CONTRACT_NAME: &str = "crates.io:identity-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    ADMIN.save(deps.storage, &admin)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterIdentity { did, metadata_hash } => {
            execute_register_identity(deps, env, info, did, metadata_hash)
        }
        ExecuteMsg::UpdateMetadata { metadata_hash } => {
            execute_update_metadata(deps, info, metadata_hash)
        }
        ExecuteMsg::DeactivateIdentity { identity } => {
            execute_set_active(deps, info, identity, false)
        }
        ExecuteMsg::ActivateIdentity { identity } => execute_set_active(deps, info, identity, true),
        ExecuteMsg::AddAlias { alias } => execute_add_alias(deps, info, alias),
        ExecuteMsg::TransferAdmin { new_admin } => execute_transfer_admin(deps, info, new_admin),
    }
}

pub fn execute_register_identity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    did: String,
    metadata_hash: String,
) -> Result<Response, ContractError> {
    if did.is_empty() {
        return Err(ContractError::InvalidInput {});
    }

    if IDENTITIES.has(deps.storage, &info.sender) {
        return Err(ContractError::AlreadyRegistered {});
    }

    let record = IdentityRecord {
        did: did.clone(),
        metadata_hash,
        created_at: env.block.height,
    };

    IDENTITIES.save(deps.storage, &info.sender, &record)?;
    STATUS.save(deps.storage, &info.sender, &true)?;

    Ok(Response::new()
        .add_attribute("method", "register_identity")
        .add_attribute("owner", info.sender)
        .add_attribute("did", did)
        .add_attribute("created_at", record.created_at.to_string()))
}

pub fn execute_update_metadata(
    deps: DepsMut,
    info: MessageInfo,
    metadata_hash: String,
) -> Result<Response, ContractError> {
    IDENTITIES.update(deps.storage, &info.sender, |maybe_record| {
        let mut record = maybe_record.ok_or(ContractError::NotFound {})?;
        record.metadata_hash = metadata_hash;
        Ok::<_, ContractError>(record)
    })?;

    Ok(Response::new()
        .add_attribute("method", "update_metadata")
        .add_attribute("owner", info.sender))
}

/// Shared body of activate/deactivate. Repeating the current value succeeds.
pub fn execute_set_active(
    deps: DepsMut,
    info: MessageInfo,
    identity: String,
    active: bool,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if !is_admin(&admin, &info.sender) {
        return Err(ContractError::NotAuthorized {});
    }

    // Compared verbatim: an identifier that never registered is simply absent.
    let identity_addr = Addr::unchecked(identity);
    if !STATUS.has(deps.storage, &identity_addr) {
        return Err(ContractError::NotFound {});
    }

    STATUS.save(deps.storage, &identity_addr, &active)?;

    let method = if active {
        "activate_identity"
    } else {
        "deactivate_identity"
    };
    Ok(Response::new()
        .add_attribute("method", method)
        .add_attribute("identity", identity_addr))
}

pub fn execute_add_alias(
    deps: DepsMut,
    info: MessageInfo,
    alias: String,
) -> Result<Response, ContractError> {
    if !IDENTITIES.has(deps.storage, &info.sender) {
        return Err(ContractError::NotFound {});
    }

    // No ownership check on the alias: a later claim replaces the earlier one.
    let previous = ALIASES.may_load(deps.storage, &alias)?;
    ALIASES.save(deps.storage, &alias, &info.sender)?;

    let mut res = Response::new()
        .add_attribute("method", "add_alias")
        .add_attribute("owner", info.sender)
        .add_attribute("alias", alias);
    if let Some(previous) = previous {
        res = res.add_attribute("previous_owner", previous);
    }
    Ok(res)
}

pub fn execute_transfer_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if !is_admin(&admin, &info.sender) {
        return Err(ContractError::NotAuthorized {});
    }

    // Accepted as-is, including empty or unchanged values.
    let new_admin = Addr::unchecked(new_admin);
    ADMIN.save(deps.storage, &new_admin)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_admin")
        .add_attribute("previous_admin", admin)
        .add_attribute("new_admin", new_admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetIdentity { owner } => to_json_binary(&query_identity(deps, owner)?),
        QueryMsg::IsIdentityActive { owner } => {
            to_json_binary(&query_is_identity_active(deps, owner)?)
        }
        QueryMsg::GetAliasOwner { alias } => to_json_binary(&query_alias_owner(deps, alias)?),
        QueryMsg::GetAdmin {} => to_json_binary(&query_admin(deps)?),
    }
}

fn query_identity(deps: Deps, owner: String) -> StdResult<IdentityResponse> {
    let identity = IDENTITIES.may_load(deps.storage, &Addr::unchecked(owner))?;
    Ok(IdentityResponse { identity })
}

/// Never-registered and deactivated owners both report `false`.
fn query_is_identity_active(deps: Deps, owner: String) -> StdResult<ActiveResponse> {
    let active = STATUS
        .may_load(deps.storage, &Addr::unchecked(owner))?
        .unwrap_or(false);
    Ok(ActiveResponse { active })
}

fn query_alias_owner(deps: Deps, alias: String) -> StdResult<AliasOwnerResponse> {
    let owner = ALIASES.may_load(deps.storage, &alias)?;
    Ok(AliasOwnerResponse { owner })
}

fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let admin = ADMIN.load(deps.storage)?;
    Ok(AdminResponse { admin })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    let current: Version = CONTRACT_VERSION
        .parse()
        .map_err(|err: semver::Error| StdError::generic_err(err.to_string()))?;

    // Foreign contracts, unparseable versions and downgrades are all refused.
    let previous = match stored.version.parse::<Version>() {
        Ok(previous) if stored.contract == CONTRACT_NAME && previous <= current => previous,
        _ => {
            return Err(ContractError::CannotMigrate {
                contract: stored.contract,
                version: stored.version,
            })
        }
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", previous.to_string())
        .add_attribute("to_version", CONTRACT_VERSION))
}
