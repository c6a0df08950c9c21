//! Loading of precompiled contract artifacts.
//!
//! An artifact is made of two files produced by the contract build: the JSON
//! ABI and the hex encoded creation bytecode.

use {
    alloy::{
        json_abi::JsonAbi,
        primitives::{Bytes, hex},
    },
    std::{
        fs,
        io,
        path::{Path, PathBuf},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed ABI in {}", path.display())]
    Abi {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed bytecode in {}", path.display())]
    Bytecode {
        path: PathBuf,
        #[source]
        source: hex::FromHexError,
    },
    #[error("{} contains no bytecode", path.display())]
    EmptyBytecode { path: PathBuf },
    #[error("constructor expects {count} argument(s) but deployments pass none")]
    ConstructorArguments { count: usize },
}

#[derive(Debug, Clone)]
pub struct Artifact {
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl Artifact {
    /// Reads and validates the ABI and bytecode files.
    pub fn load(abi_path: &Path, bytecode_path: &Path) -> Result<Self, ArtifactError> {
        let abi = parse_abi(abi_path, &read(abi_path)?)?;
        let bytecode = parse_bytecode(bytecode_path, &read(bytecode_path)?)?;

        if let Some(constructor) = abi.constructor.as_ref().filter(|c| !c.inputs.is_empty()) {
            return Err(ArtifactError::ConstructorArguments {
                count: constructor.inputs.len(),
            });
        }

        tracing::debug!(
            abi = %abi_path.display(),
            bytecode_len = bytecode.len(),
            functions = abi.functions.len(),
            "loaded contract artifact"
        );
        Ok(Self { abi, bytecode })
    }
}

fn read(path: &Path) -> Result<String, ArtifactError> {
    fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Accepts a bare ABI array as well as a compiler artifact object carrying the
/// ABI in its `abi` field.
fn parse_abi(path: &Path, contents: &str) -> Result<JsonAbi, ArtifactError> {
    let error = |source| ArtifactError::Abi {
        path: path.to_owned(),
        source,
    };
    let value: serde_json::Value = serde_json::from_str(contents).map_err(error)?;
    let value = match value {
        serde_json::Value::Object(mut artifact) if artifact.contains_key("abi") => {
            artifact.remove("abi").unwrap_or_default()
        }
        value => value,
    };
    serde_json::from_value(value).map_err(error)
}

fn parse_bytecode(path: &Path, contents: &str) -> Result<Bytes, ArtifactError> {
    let bytecode = hex::decode(contents.trim()).map_err(|source| ArtifactError::Bytecode {
        path: path.to_owned(),
        source,
    })?;
    if bytecode.is_empty() {
        return Err(ArtifactError::EmptyBytecode {
            path: path.to_owned(),
        });
    }
    Ok(bytecode.into())
}

#[cfg(test)]
mod tests {
    use {super::*, tempfile::TempDir};

    const ERC20_ABI: &str = r#"[
        {"type":"constructor","inputs":[],"stateMutability":"nonpayable"},
        {"type":"function","name":"totalSupply","inputs":[],"outputs":[{"name":"","type":"uint256","internalType":"uint256"}],"stateMutability":"view"},
        {"type":"event","name":"Transfer","inputs":[{"name":"from","type":"address","indexed":true},{"name":"to","type":"address","indexed":true},{"name":"value","type":"uint256","indexed":false}],"anonymous":false}
    ]"#;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_abi_and_bytecode() {
        let dir = TempDir::new().unwrap();
        let abi = write(&dir, "Token.json", ERC20_ABI);
        let bin = write(&dir, "Token.bin", "6001600c60003960016000f300\n");

        let artifact = Artifact::load(&abi, &bin).unwrap();
        assert!(artifact.abi.function("totalSupply").is_some());
        assert!(artifact.abi.event("Transfer").is_some());
        assert_eq!(
            artifact.bytecode,
            Bytes::from_static(&[
                0x60, 0x01, 0x60, 0x0c, 0x60, 0x00, 0x39, 0x60, 0x01, 0x60, 0x00, 0xf3, 0x00
            ])
        );
    }

    #[test]
    fn accepts_prefixed_bytecode_and_artifact_objects() {
        let dir = TempDir::new().unwrap();
        let abi = write(&dir, "Token.json", &format!(r#"{{"abi":{ERC20_ABI},"bytecode":{{}}}}"#));
        let bin = write(&dir, "Token.bin", "0x6080");

        let artifact = Artifact::load(&abi, &bin).unwrap();
        assert!(artifact.abi.function("totalSupply").is_some());
        assert_eq!(artifact.bytecode, Bytes::from_static(&[0x60, 0x80]));
    }

    #[test]
    fn missing_files_name_the_path() {
        let dir = TempDir::new().unwrap();
        let abi = write(&dir, "Token.json", ERC20_ABI);
        let bin = dir.path().join("Missing.bin");

        let err = Artifact::load(&abi, &bin).unwrap_err();
        assert!(matches!(&err, ArtifactError::Read { path, .. } if *path == bin));
        assert!(err.to_string().contains("Missing.bin"));

        let err = Artifact::load(&dir.path().join("Missing.json"), &bin).unwrap_err();
        assert!(matches!(err, ArtifactError::Read { .. }));
    }

    #[test]
    fn rejects_malformed_abi() {
        let dir = TempDir::new().unwrap();
        let bin = write(&dir, "Token.bin", "6080");

        for contents in ["", "{not json", r#"{"abi": 5}"#] {
            let abi = write(&dir, "Token.json", contents);
            assert!(
                matches!(Artifact::load(&abi, &bin), Err(ArtifactError::Abi { .. })),
                "{contents}"
            );
        }
    }

    #[test]
    fn rejects_malformed_or_empty_bytecode() {
        let dir = TempDir::new().unwrap();
        let abi = write(&dir, "Token.json", "[]");

        let bin = write(&dir, "Token.bin", "60zz");
        assert!(matches!(
            Artifact::load(&abi, &bin),
            Err(ArtifactError::Bytecode { .. })
        ));

        let bin = write(&dir, "Token.bin", " \n");
        assert!(matches!(
            Artifact::load(&abi, &bin),
            Err(ArtifactError::EmptyBytecode { .. })
        ));
    }

    #[test]
    fn rejects_constructor_with_arguments() {
        let dir = TempDir::new().unwrap();
        let abi = write(
            &dir,
            "Token.json",
            r#"[{"type":"constructor","inputs":[{"name":"name","type":"string"},{"name":"symbol","type":"string"}],"stateMutability":"nonpayable"}]"#,
        );
        let bin = write(&dir, "Token.bin", "6080");

        assert!(matches!(
            Artifact::load(&abi, &bin),
            Err(ArtifactError::ConstructorArguments { count: 2 })
        ));
    }
}
