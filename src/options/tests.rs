use super::*;

#[test]
fn test_option_names_round_trip_through_keys() {
    for name in CompilerOptionName::ALL {
        assert_eq!(name.as_str().parse::<CompilerOptionName>().unwrap(), name);
    }
    assert!("projectDir".parse::<CompilerOptionName>().is_err());
}

#[test]
fn test_option_keys() {
    assert_eq!(CompilerOptionName::ProjectDir.as_str(), "projectDirectory");
    assert_eq!(CompilerOptionName::CompilerPhase.as_str(), "compilerPhase");
    assert_eq!(
        CompilerOptionName::BuildCompiledPackage.to_string(),
        "buildCompiledPackage"
    );
    assert_eq!(CompilerOptionName::Offline.to_string(), "offline");
    assert_eq!(CompilerOptionName::LockEnabled.to_string(), "lockEnabled");
}

#[test]
fn test_phase_ordering() {
    assert!(CompilerPhase::CodeGen.includes(CompilerPhase::Define));
    assert!(CompilerPhase::CodeGen.includes(CompilerPhase::CodeGen));
    assert!(CompilerPhase::TypeCheck.includes(CompilerPhase::Define));
    assert!(!CompilerPhase::TypeCheck.includes(CompilerPhase::Desugar));
}

#[test]
fn test_phase_parsing() {
    assert_eq!("CODE_GEN".parse::<CompilerPhase>().unwrap(), CompilerPhase::CodeGen);
    assert_eq!(CompilerPhase::CodeAnalyze.to_string(), "CODE_ANALYZE");

    let err = "code_gen".parse::<CompilerPhase>().unwrap_err();
    assert!(err.to_string().contains("Unknown compiler phase"));
}

#[test]
fn test_put_keeps_insertion_order() {
    let mut config = BuildConfiguration::new();
    config.put(CompilerOptionName::ProjectDir, "/proj");
    config.put(CompilerOptionName::Offline, "true");
    config.put(CompilerOptionName::CompilerPhase, "CODE_GEN");
    config.put(CompilerOptionName::Offline, "false");

    let keys: Vec<_> = config.iter().map(|(key, _)| key).collect();
    assert_eq!(
        keys,
        vec![
            CompilerOptionName::ProjectDir,
            CompilerOptionName::Offline,
            CompilerOptionName::CompilerPhase,
        ]
    );
    assert_eq!(config.get_str(CompilerOptionName::Offline), Some("false"));
    assert_eq!(config.len(), 3);
}

#[test]
fn test_typed_reads() {
    let config = BuildConfiguration::new()
        .with(CompilerOptionName::LockEnabled, "true")
        .with(CompilerOptionName::Offline, "maybe")
        .with(CompilerOptionName::CompilerPhase, "DESUGAR");

    assert_eq!(
        config.get_bool(CompilerOptionName::LockEnabled).unwrap(),
        Some(true)
    );
    assert_eq!(
        config
            .get_bool(CompilerOptionName::BuildCompiledPackage)
            .unwrap(),
        None
    );
    let err = config.get_bool(CompilerOptionName::Offline).unwrap_err();
    assert!(err.to_string().contains("not a boolean"));

    assert_eq!(config.phase().unwrap(), Some(CompilerPhase::Desugar));
    assert_eq!(BuildConfiguration::new().phase().unwrap(), None);
}

#[test]
fn test_serializes_as_ordered_map() {
    let config = BuildConfiguration::new()
        .with(CompilerOptionName::ProjectDir, "/proj")
        .with(CompilerOptionName::CompilerPhase, "CODE_GEN");

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(
        json,
        r#"{"projectDirectory":"/proj","compilerPhase":"CODE_GEN"}"#
    );
}

#[cfg(unix)]
#[test]
fn test_values_keep_raw_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let raw = OsStr::from_bytes(b"/src\xfe");
    let config = BuildConfiguration::new()
        .with(CompilerOptionName::ProjectDir, raw)
        .with(CompilerOptionName::Offline, raw);

    assert_eq!(config.get(CompilerOptionName::ProjectDir), Some(raw));
    assert!(config.get_bool(CompilerOptionName::Offline).is_err());

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.starts_with(r#"{"projectDirectory":"/src"#));
}

#[test]
fn test_empty_configuration() {
    let config = BuildConfiguration::new();
    assert!(config.is_empty());
    assert!(!config.contains(CompilerOptionName::ProjectDir));
}
