//! Property tests for deploy planning.

use std::path::PathBuf;

use proptest::prelude::*;

use wasmship::{plan_deploy, Config, ProjectLayout, TargetAccount};

fn crate_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The deploy step always receives the artifact the build step produces.
    #[test]
    fn property_deploy_gets_build_artifact(
        name in crate_name(),
        account in "[a-z0-9]{2,12}\\.testnet",
    ) {
        let layout = ProjectLayout {
            root: PathBuf::from("/work"),
            crate_name: name.clone(),
            target_dir: PathBuf::from("target"),
        };
        let account = TargetAccount::parse(account).unwrap();
        let plan = plan_deploy(&Config::default(), &layout, account.clone()).unwrap();

        let expected = format!(
            "target/wasm32-unknown-unknown/release/{}.wasm",
            name.replace('-', "_")
        );
        prop_assert_eq!(plan.artifact.to_str().unwrap(), expected.as_str());
        prop_assert_eq!(&plan.deploy.args[1], account.as_str());
        prop_assert_eq!(plan.deploy.args[2].as_str(), expected.as_str());
        prop_assert!(plan.build.args.contains(&"--release".to_string()));
    }
}
