//! Reusable test content

/// Minimal contract manifest (artifact: ref_exchange.wasm)
pub const CONTRACT_MANIFEST: &str = r#"[package]
name = "ref-exchange"
version = "0.1.0"
edition = "2018"

[lib]
crate-type = ["cdylib", "rlib"]
"#;

/// Artifact path the deploy tool should receive for `CONTRACT_MANIFEST`
pub const RELEASE_ARTIFACT: &str = "target/wasm32-unknown-unknown/release/ref_exchange.wasm";

/// The three historical deploy accounts as named targets
pub const NAMED_TARGETS: &str = r#"
[targets.contractspace]
account = "contractspace.testnet"

[targets.oscar]
account = "oscarcontract.testnet"

[targets.beer]
account = "beer333.testnet"
"#;
