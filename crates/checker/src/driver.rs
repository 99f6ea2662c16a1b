use crate::{report::Reporter, rpc::Connector, section, Summary};
use state_checker_artifacts_abi::AbiLoader;
use state_checker_artifacts_description::Description;
use state_checker_core::error::Result;
use std::io::Write;

/// Checks a parsed [`Description`] against the chains it names.
pub struct StateChecker<C> {
    description: Description,
    abis: AbiLoader,
    connector: C,
}

impl<C: Connector> StateChecker<C> {
    pub fn new(description: Description, abis: AbiLoader, connector: C) -> Self {
        Self { description, abis, connector }
    }

    /// Runs every section in declared order and writes the summary line.
    ///
    /// Returns the tally on completion. Fatal errors (unresolved endpoints, missing or
    /// malformed ABIs, incomplete coverage) abort the run.
    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<Summary> {
        for (network, section) in self.description.sections() {
            reporter.section(&network.to_string())?;
            section::run_section(network, section, &self.abis, &self.connector, reporter).await?;
        }
        let summary = reporter.finish()?;
        info!(%summary, "done");
        Ok(summary)
    }
}
