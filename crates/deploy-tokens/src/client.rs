//! Construction of the signer and the wallet-bound provider used to submit
//! the deployments.

use {
    alloy::{
        network::EthereumWallet,
        providers::{DynProvider, Provider, ProviderBuilder},
        signers::local::{LocalSignerError, PrivateKeySigner},
    },
    url::Url,
};

pub type AlloyProvider = DynProvider;

#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("no private key configured, set PRIVATE_KEY or pass --private-key")]
    Missing,
    #[error("private key is not a valid hex encoded secp256k1 secret key")]
    Invalid(#[source] LocalSignerError),
}

/// Parses a hex encoded private key, with or without `0x` prefix.
pub fn signer(private_key: &str) -> Result<PrivateKeySigner, SignerError> {
    let private_key = private_key.trim();
    if private_key.is_empty() {
        return Err(SignerError::Missing);
    }
    private_key.parse().map_err(SignerError::Invalid)
}

/// Creates an HTTP provider that signs and fills every transaction it sends
/// with `signer`.
///
/// No request is made until the provider is first used.
pub fn provider(url: &Url, signer: PrivateKeySigner) -> AlloyProvider {
    ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(url.clone())
        .erased()
}
