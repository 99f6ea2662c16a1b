//! Dispatch of the base, proxy and implementation scopes of one contract entry.

use crate::{
    acl,
    contract::BoundContract,
    invoker::{self, Outcome},
    report::Reporter,
    rpc::CallClient,
};
use alloy_primitives::Address;
use state_checker_artifacts_abi::AbiLoader;
use state_checker_artifacts_description::ContractEntry;
use state_checker_core::{error::Result, utils};
use std::io::Write;

/// Runs every scope of `entry` in order: base checks, ACL, proxy checks, implementation checks.
///
/// An address that does not parse is recorded as a failure and the scopes bound to it are
/// skipped.
pub async fn resolve_entry<W: Write>(
    alias: &str,
    entry: &ContractEntry,
    abis: &AbiLoader,
    client: &dyn CallClient,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let Some(address) = parse_or_record(&entry.address, "address", reporter)? else {
        return Ok(());
    };
    debug!(alias, name = %entry.name, %address, "resolving entry");

    let abi = abis.load(&entry.name)?;
    let contract = BoundContract::new(&entry.name, address, abi.clone(), client);
    invoker::run_check_set(&contract, &entry.checks, reporter).await?;
    acl::check_acl(&contract, entry, reporter).await?;

    let Some(proxy) = entry.proxy() else {
        return Ok(());
    };

    reporter.banner("Proxy checks")?;
    let proxy_abi = abis.load(proxy.proxy_name)?;
    let contract = BoundContract::new(proxy.proxy_name, address, proxy_abi, client);
    invoker::run_check_set(&contract, proxy.proxy_checks, reporter).await?;

    reporter.banner("Implementation checks")?;
    let Some(implementation) = parse_or_record(proxy.implementation, "implementation", reporter)?
    else {
        return Ok(());
    };
    let contract = BoundContract::new(&entry.name, implementation, abi, client);
    invoker::run_check_set(&contract, proxy.implementation_checks, reporter).await
}

fn parse_or_record<W: Write>(
    address: &str,
    field: &str,
    reporter: &mut Reporter<W>,
) -> Result<Option<Address>> {
    match utils::parse_address(address) {
        Ok(address) => Ok(Some(address)),
        Err(err) => {
            warn!(%address, field, "invalid address");
            reporter.record(&format!("{field} {address}"), &Outcome::Invalid(err.to_string()))?;
            Ok(None)
        }
    }
}
