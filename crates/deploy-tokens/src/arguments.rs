use {
    clap::Parser,
    std::{fmt, path::PathBuf},
    url::Url,
};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";
pub const DEFAULT_ABI_PATH: &str = "../out/abi/MockERC20.json";
pub const DEFAULT_BYTECODE_PATH: &str = "../out/MockERC20.bin";

// Values are kept as strings so that an empty environment variable (e.g.
// `RPC_URL=` in `.env`) falls back to the default instead of being rejected
// during parsing, and malformed values surface as regular runtime errors.
#[derive(Parser)]
#[clap(about = "Deploys the stake and reward token contracts")]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Hex encoded private key of the account paying for the deployments.
    #[clap(long, env, default_value = "", hide_env_values = true)]
    pub private_key: String,

    /// Path to the JSON ABI of the token contract. Either a bare ABI array or
    /// a compiler artifact with an `abi` field.
    #[clap(long, env, default_value = DEFAULT_ABI_PATH)]
    pub abi_path: String,

    /// Path to the hex encoded creation bytecode of the token contract.
    #[clap(long, env, default_value = DEFAULT_BYTECODE_PATH)]
    pub bytecode_path: String,

    #[clap(long, env, default_value = "warn,deploy_tokens=info")]
    pub log_filter: String,
}

impl Arguments {
    pub fn rpc_url(&self) -> Result<Url, url::ParseError> {
        or_default(&self.rpc_url, DEFAULT_RPC_URL).parse()
    }

    pub fn abi_path(&self) -> PathBuf {
        or_default(&self.abi_path, DEFAULT_ABI_PATH).into()
    }

    pub fn bytecode_path(&self) -> PathBuf {
        or_default(&self.bytecode_path, DEFAULT_BYTECODE_PATH).into()
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    match value.trim() {
        "" => default,
        value => value,
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rpc_url: {}", or_default(&self.rpc_url, DEFAULT_RPC_URL))?;
        writeln!(f, "private_key: SECRET")?;
        writeln!(f, "abi_path: {}", self.abi_path().display())?;
        writeln!(f, "bytecode_path: {}", self.bytecode_path().display())?;
        writeln!(f, "log_filter: {}", self.log_filter)?;
        Ok(())
    }
}
