//! Configuration contracts (CONFIG-001 through CONFIG-003)
//!
//! Priority: CLI flags > env vars > config file > defaults

use crate::common::*;

const SHAKING_CONFIG: &str = r#"
name = "my-app"

[tree_shaking]
enabled = true

[[bundle]]
kind = "vendor"
output_file = "assets/vendor.js"
files = ["vendor/loader.js"]
"#;

/// CONTRACT CONFIG-001: Layer Priority Order
mod config_priority {
    use super::*;

    #[test]
    fn contract_config_file_enables_tree_shaking() {
        let env = TestEnv::app();
        env.write("assetline.toml", SHAKING_CONFIG);

        let result = env.run(&["build"]);
        assert!(result.success, "build failed: {}", result.stderr);

        let vendor = env.read("dist/assets/vendor.js");
        assert!(vendor.contains("lib/used"));
        assert!(!vendor.contains("lib/unused"));
    }

    #[test]
    fn contract_env_var_overrides_config_file() {
        let env = TestEnv::app();
        env.write("assetline.toml", SHAKING_CONFIG);

        let result = env.run_with_env(&["build"], &[("ASSETLINE_TREE_SHAKING", "0")]);
        assert!(result.success, "build failed: {}", result.stderr);

        assert!(env.read("dist/assets/vendor.js").contains("lib/unused"));
    }

    #[test]
    fn contract_cli_flag_overrides_env_var() {
        let env = TestEnv::app();

        let result = env.run_with_env(
            &["build", "--no-tree-shaking"],
            &[("ASSETLINE_TREE_SHAKING", "1")],
        );
        assert!(result.success, "build failed: {}", result.stderr);

        assert!(env.read("dist/assets/vendor.js").contains("lib/unused"));
    }

    #[test]
    fn contract_env_var_redirects_output() {
        let env = TestEnv::app();

        let result = env.run_with_env(&["build"], &[("ASSETLINE_OUTPUT", "public")]);
        assert!(result.success, "build failed: {}", result.stderr);

        assert!(env.path("public/assets/vendor.js").exists());
        assert!(!env.path("dist").exists());
    }
}

/// CONTRACT CONFIG-002: Unknown keys warn, never fail
mod unknown_keys {
    use super::*;

    #[test]
    fn contract_typo_is_reported_with_suggestion() {
        let env = TestEnv::app();
        env.write("assetline.toml", &format!("ouptut = \"dist\"\n{APP_CONFIG}"));

        let result = env.run(&["build"]);
        assert!(result.success, "build failed: {}", result.stderr);
        assert!(result.stderr.contains("ouptut"), "stderr: {}", result.stderr);
        assert!(result.stderr.contains("output"), "stderr: {}", result.stderr);
    }
}

/// CONTRACT CONFIG-003: Invalid configuration fails before anything is written
mod invalid_config {
    use super::*;

    #[test]
    fn contract_duplicate_output_file_is_rejected() {
        let env = TestEnv::app();
        env.write(
            "assetline.toml",
            r#"
name = "my-app"

[[bundle]]
kind = "application"
output_file = "assets/app.js"

[[bundle]]
kind = "custom"
output_file = "assets/app.js"
inputs = ["**/*.js"]
"#,
        );

        let result = env.run(&["build"]);
        assert!(!result.success);
        assert!(!env.path("dist").exists());
    }

    #[test]
    fn contract_missing_config_file_fails() {
        let env = TestEnv::new();
        let result = env.run(&["build"]);
        assert!(!result.success);
        assert!(result.stderr.contains("assetline.toml"), "stderr: {}", result.stderr);
    }
}
