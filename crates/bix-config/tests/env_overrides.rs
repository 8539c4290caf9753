use bix_config::BixConfig;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_map_onto_nested_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
        jail.set_env("BIX_INSPECT__PARALLEL", "true");
        jail.set_env("BIX_INSPECT__DOC_MAX_LINES", "7");
        jail.set_env("BIX_OUTPUT__FORMAT", "raw");

        let config = BixConfig::load().expect("config loads");
        assert!(config.inspect.parallel);
        assert_eq!(config.inspect.doc_max_lines, 7);
        assert_eq!(config.output.format, "raw");
        Ok(())
    });
}

#[test]
fn env_vars_beat_global_config_file() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
        std::fs::create_dir("bix").map_err(|e| e.to_string())?;
        jail.create_file("bix/config.toml", "[inspect]\ndoc_max_lines = 2\n")?;

        let from_file = BixConfig::load().expect("config loads");
        assert_eq!(from_file.inspect.doc_max_lines, 2);

        jail.set_env("BIX_INSPECT__DOC_MAX_LINES", "4");
        let from_env = BixConfig::load().expect("config loads");
        assert_eq!(from_env.inspect.doc_max_lines, 4);
        Ok(())
    });
}
