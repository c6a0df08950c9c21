use {
    crate::{artifact::Artifact, client::AlloyProvider, report::Deployment},
    alloy::{
        network::TransactionBuilder,
        primitives::{Address, TxHash},
        providers::{PendingTransactionError, Provider},
        rpc::types::TransactionRequest,
        transports::TransportError,
    },
    anyhow::Context,
    std::fmt,
};

/// The role a deployed token instance plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Stake,
    Reward,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stake => "stake",
            Self::Reward => "reward",
        })
    }
}

/// A contract whose creation transaction has been included in a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: Address,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("failed to submit contract creation transaction")]
    Submit(#[source] TransportError),
    #[error("failed waiting for contract creation transaction {tx_hash} to be included")]
    Confirmation {
        tx_hash: TxHash,
        #[source]
        source: PendingTransactionError,
    },
    #[error("contract creation transaction {0} reverted")]
    Reverted(TxHash),
    #[error("receipt of transaction {0} carries no contract address")]
    MissingContractAddress(TxHash),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Deploy: Send + Sync {
    /// Submits a contract creation transaction and waits until it is
    /// included.
    async fn deploy(&self) -> Result<DeployedContract, DeployError>;
}

/// Deploys new instances of a contract artifact from the provider's signer.
pub struct ContractFactory {
    artifact: Artifact,
    provider: AlloyProvider,
}

impl ContractFactory {
    pub fn new(artifact: Artifact, provider: AlloyProvider) -> Self {
        Self { artifact, provider }
    }
}

#[async_trait::async_trait]
impl Deploy for ContractFactory {
    async fn deploy(&self) -> Result<DeployedContract, DeployError> {
        // Nonce, gas and chain id are filled in by the provider.
        let tx = TransactionRequest::default().with_deploy_code(self.artifact.bytecode.clone());
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(DeployError::Submit)?;
        let tx_hash = *pending.tx_hash();
        tracing::debug!(?tx_hash, "submitted contract creation transaction");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|source| DeployError::Confirmation { tx_hash, source })?;
        if !receipt.status() {
            return Err(DeployError::Reverted(tx_hash));
        }
        let address = receipt
            .contract_address
            .ok_or(DeployError::MissingContractAddress(tx_hash))?;

        Ok(DeployedContract {
            address,
            tx_hash,
            block_number: receipt.block_number,
        })
    }
}

/// Deploys the stake token and then the reward token.
///
/// The reward deployment is only submitted once the stake deployment has been
/// included. Any failure aborts the whole procedure.
pub async fn deploy_pair(factory: &dyn Deploy) -> anyhow::Result<Deployment> {
    let stake = deploy_token(factory, Token::Stake).await?;
    let reward = deploy_token(factory, Token::Reward).await?;
    Ok(Deployment { stake, reward })
}

async fn deploy_token(factory: &dyn Deploy, token: Token) -> anyhow::Result<DeployedContract> {
    let contract = factory
        .deploy()
        .await
        .with_context(|| format!("failed to deploy {token} token"))?;
    tracing::info!(
        %token,
        address = %contract.address,
        tx_hash = ?contract.tx_hash,
        block_number = ?contract.block_number,
        "token deployed"
    );
    Ok(contract)
}
