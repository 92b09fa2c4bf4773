//! Compilation artifacts as written by Hardhat (`artifacts/`) or Foundry
//! (`out/`). Only the ABI and the creation bytecode are used.

use {
    alloy::{
        json_abi::JsonAbi,
        primitives::{Bytes, hex},
    },
    anyhow::{Context, Result, bail, ensure},
    serde::Deserialize,
    std::{
        ffi::OsStr,
        path::{Path, PathBuf},
    },
    walkdir::WalkDir,
};

#[derive(Clone, Debug)]
pub struct Artifact {
    pub name: Option<String>,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    #[serde(default)]
    contract_name: Option<String>,
    abi: JsonAbi,
    bytecode: RawBytecode,
}

/// Hardhat stores the bytecode as a plain hex string, Foundry wraps it in an
/// object next to its source map.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

impl Artifact {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read artifact {path:?}"))?;
        Self::from_json(&json).with_context(|| format!("invalid artifact {path:?}"))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawArtifact = serde_json::from_str(json).context("malformed artifact json")?;
        let code = match &raw.bytecode {
            RawBytecode::Hex(code) | RawBytecode::Object { object: code } => code,
        };
        // Library placeholders look like `__$<hash>$__` and are not hex.
        ensure!(
            !code.contains("__"),
            "bytecode contains unlinked library references"
        );
        let bytecode = Bytes::from(hex::decode(code).context("bytecode is not valid hex")?);
        ensure!(
            !bytecode.is_empty(),
            "artifact has no bytecode, the contract is abstract or an interface"
        );

        Ok(Self {
            name: raw.contract_name,
            abi: raw.abi,
            bytecode,
        })
    }

    /// Checks that the constructor takes parameters of exactly these types.
    pub fn ensure_constructor(&self, expected: &[&str]) -> Result<()> {
        let actual = self
            .abi
            .constructor
            .as_ref()
            .map(|constructor| {
                constructor
                    .inputs
                    .iter()
                    .map(|param| param.ty.as_str())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        ensure!(
            actual == expected,
            "constructor takes ({}) but ({}) was expected",
            actual.join(", "),
            expected.join(", "),
        );
        Ok(())
    }
}

/// Finds the artifact of `contract` below `root`.
///
/// The Hardhat location `<root>/<Contract>.sol/<Contract>.json` is tried
/// first, then the whole tree is searched for `<Contract>.json`.
pub fn find(root: &Path, contract: &str) -> Result<PathBuf> {
    let file_name = format!("{contract}.json");
    let hardhat = root.join(format!("{contract}.sol")).join(&file_name);
    if hardhat.is_file() {
        return Ok(hardhat);
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to search artifacts in {root:?}"))?;
        if entry.file_type().is_file() && entry.file_name() == OsStr::new(&file_name) {
            return Ok(entry.into_path());
        }
    }
    bail!("no artifact for {contract} found in {root:?}")
}
