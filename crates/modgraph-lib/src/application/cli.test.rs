// Tests for CLI parsing

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["modgraph"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.config.manifest.to_str(), Some("modules.toml"));
}

#[test]
fn test_parse_order_command() {
    let cli = Cli::try_parse_from(["modgraph", "order", "--json"]).unwrap();
    match cli.command {
        Some(Commands::Order { json }) => assert!(json),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_resolve_command() {
    let cli = Cli::try_parse_from(["modgraph", "resolve", "core", "--test"]).unwrap();
    match cli.command {
        Some(Commands::Resolve { module, test, json }) => {
            assert_eq!(module, "core");
            assert!(test);
            assert!(!json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_resolve_requires_module_argument() {
    assert!(Cli::try_parse_from(["modgraph", "resolve"]).is_err());
}

#[test]
fn test_parse_global_config_flags() {
    let cli = Cli::try_parse_from([
        "modgraph",
        "--manifest",
        "build-modules.toml",
        "--log-level",
        "3",
        "--color",
        "never",
        "check",
    ])
    .unwrap();

    assert_eq!(cli.config.manifest.to_str(), Some("build-modules.toml"));
    assert_eq!(cli.config.log_level, 3);
    assert_eq!(cli.config.color, crate::primitives::ColorMode::Never);
    assert!(matches!(cli.command, Some(Commands::Check)));
}

#[test]
fn test_unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["modgraph", "frobnicate"]).is_err());
}

#[test]
fn test_requires_manifest() {
    assert!(!Commands::Version.requires_manifest());
    assert!(Commands::Check.requires_manifest());
    assert!(Commands::Order { json: false }.requires_manifest());
    assert!(
        Commands::Resolve {
            module: "core".to_string(),
            test: false,
            json: false,
        }
        .requires_manifest()
    );
}
