//! Per-network section driver.

use crate::{
    resolver,
    report::Reporter,
    rpc::{self, Connector},
};
use state_checker_artifacts_abi::{missing_coverage, AbiLoader};
use state_checker_artifacts_description::{Network, NetworkSection};
use state_checker_core::{
    error::{CheckerError, Result},
    utils,
};
use std::io::Write;

/// Fails if any entry of `section` leaves a non-mutating function of its ABI without a check.
///
/// Only the base `checks` count; proxy and implementation scopes are not covered.
pub fn check_coverage(section: &NetworkSection, abis: &AbiLoader) -> Result<()> {
    for (alias, entry) in &section.contracts {
        let abi = abis.load(&entry.name)?;
        let missing = missing_coverage(&abi, entry.checks.keys().map(String::as_str));
        if !missing.is_empty() {
            return Err(CheckerError::Coverage {
                alias: alias.clone(),
                name: entry.name.clone(),
                missing,
            });
        }
    }
    Ok(())
}

/// Checks every contract of one network section in declared order.
///
/// The endpoint is resolved and coverage verified before the first call; a new client is
/// opened for the section and dropped at its end.
pub async fn run_section<W: Write>(
    network: Network,
    section: &NetworkSection,
    abis: &AbiLoader,
    connector: &dyn Connector,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let endpoint = rpc::resolve_endpoint(&section.rpc_url)?;
    check_coverage(section, abis)?;
    let client = connector.connect(&endpoint)?;
    info!(%network, contracts = section.contracts.len(), "checking section");

    for (alias, entry) in &section.contracts {
        let address =
            utils::canonical_address(&entry.address).unwrap_or_else(|| entry.address.clone());
        reporter.banner(&format!("Contract: {alias} - ({}) {address}", entry.name))?;
        resolver::resolve_entry(alias, entry, abis, client.as_ref(), reporter).await?;
    }
    Ok(())
}
