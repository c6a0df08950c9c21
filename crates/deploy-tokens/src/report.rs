use {
    crate::deployer::{DeployedContract, Token},
    std::fmt,
};

/// The outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub stake: DeployedContract,
    pub reward: DeployedContract,
}

/// Renders one `<token>: <address>` line per deployed contract, in deployment
/// order. Addresses are EIP-55 checksummed.
impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", Token::Stake, self.stake.address)?;
        writeln!(f, "{}: {}", Token::Reward, self.reward.address)
    }
}
