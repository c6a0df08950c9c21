//! Deploys a stake token and a reward token from a precompiled contract
//! artifact and reports their addresses.

pub mod arguments;
pub mod artifact;
pub mod client;
pub mod deployer;
pub mod report;

use {
    anyhow::{Context, Result},
    artifact::Artifact,
    deployer::ContractFactory,
    report::Deployment,
};

/// Runs the whole deployment: configuration, artifact, then both token
/// deployments one after the other.
///
/// The endpoint, the signer and the artifact are validated before the node is
/// contacted.
pub async fn run(args: &arguments::Arguments) -> Result<Deployment> {
    let rpc_url = args.rpc_url().context("invalid RPC_URL")?;
    let signer = client::signer(&args.private_key)?;
    let artifact = Artifact::load(&args.abi_path(), &args.bytecode_path())
        .context("failed to load token artifact")?;

    tracing::info!(
        %rpc_url,
        deployer = %signer.address(),
        "deploying token contracts"
    );
    let provider = client::provider(&rpc_url, signer);
    let factory = ContractFactory::new(artifact, provider);
    deployer::deploy_pair(&factory).await
}
