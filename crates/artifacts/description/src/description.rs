use crate::check::CheckSet;
use indexmap::IndexMap;
use serde::Deserialize;
use state_checker_core::{
    error::{CheckerError, Result},
    utils,
};
use std::{fmt, path::Path};

/// Role identifier to the accounts expected to hold it.
pub type RoleMap = IndexMap<String, Vec<String>>;

/// The network a section of the description targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    L1,
    L2,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L1 => f.write_str("L1"),
            Self::L2 => f.write_str("L2"),
        }
    }
}

/// A parsed and validated deployment description.
///
/// Sections keep the order in which they are declared.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Description {
    sections: IndexMap<Network, NetworkSection>,
}

impl Description {
    /// Reads and parses the description at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&utils::read_to_string(path)?)
    }

    /// Parses a description document. YAML merge keys are applied before the schema is checked.
    pub fn parse(content: &str) -> Result<Self> {
        let mut value: serde_yaml::Value = serde_yaml::from_str(content)?;
        value.apply_merge()?;
        let description: Self = serde_yaml::from_value(value)?;
        description.validate()?;
        Ok(description)
    }

    /// The declared sections in declaration order
    pub fn sections(&self) -> impl Iterator<Item = (Network, &NetworkSection)> + '_ {
        self.sections.iter().map(|(network, section)| (*network, section))
    }

    pub fn section(&self, network: Network) -> Option<&NetworkSection> {
        self.sections.get(&network)
    }

    fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(CheckerError::invalid("neither an `l1` nor an `l2` section is declared"));
        }
        for (network, section) in &self.sections {
            for (alias, entry) in &section.contracts {
                entry.validate().map_err(|err| {
                    CheckerError::invalid(format!("{network} contract `{alias}`: {err}"))
                })?;
            }
        }
        Ok(())
    }
}

/// The contracts deployed on one network and the endpoint to read them from.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkSection {
    /// A URL, or the name of an environment variable holding one.
    pub rpc_url: String,
    /// Contract alias to entry, in declared order.
    #[serde(default)]
    pub contracts: IndexMap<String, ContractEntry>,
}

/// A deployed contract and its expected state.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContractEntry {
    pub address: String,
    /// The ABI short-name of the contract
    pub name: String,
    pub checks: CheckSet,
    #[serde(default)]
    pub proxy_name: Option<String>,
    #[serde(default)]
    pub implementation: Option<String>,
    #[serde(default)]
    pub proxy_checks: Option<CheckSet>,
    #[serde(default)]
    pub implementation_checks: Option<CheckSet>,
    #[serde(default, alias = "ozAcl")]
    pub oz_non_enumerable_acl: Option<RoleMap>,
}

/// The proxy layer of a contract entry.
#[derive(Clone, Copy, Debug)]
pub struct ProxyScopes<'a> {
    /// ABI short-name of the proxy
    pub proxy_name: &'a str,
    /// Address of the implementation behind the proxy
    pub implementation: &'a str,
    /// Checked at the entry's address through the proxy ABI
    pub proxy_checks: &'a CheckSet,
    /// Checked at the implementation address through the entry's ABI
    pub implementation_checks: &'a CheckSet,
}

impl ContractEntry {
    /// Returns the proxy extension, if declared.
    pub fn proxy(&self) -> Option<ProxyScopes<'_>> {
        Some(ProxyScopes {
            proxy_name: self.proxy_name.as_deref()?,
            implementation: self.implementation.as_deref()?,
            proxy_checks: self.proxy_checks.as_ref()?,
            implementation_checks: self.implementation_checks.as_ref()?,
        })
    }

    /// The expected role holders, empty if none are declared.
    pub fn acl(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.oz_non_enumerable_acl.iter().flatten().flat_map(|(role, holders)| {
            holders.iter().map(move |holder| (role.as_str(), holder.as_str()))
        })
    }

    fn validate(&self) -> Result<(), String> {
        let declared = [
            self.proxy_name.is_some(),
            self.implementation.is_some(),
            self.proxy_checks.is_some(),
            self.implementation_checks.is_some(),
        ];
        if declared.contains(&true) && declared.contains(&false) {
            return Err("`proxyName`, `implementation`, `proxyChecks` and `implementationChecks` \
                        must be declared together"
                .to_string());
        }
        Ok(())
    }
}
