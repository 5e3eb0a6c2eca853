#[cfg(test)]
mod tests {
    use super::super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.compiler.program, PathBuf::from("bal"));
        assert!(config.compiler.args.is_empty());
        assert!(config.compiler.env.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
[compiler]
args = ["--experimental"]
"#,
        )
        .unwrap();

        assert_eq!(config.compiler.program, PathBuf::from("bal"));
        assert_eq!(config.compiler.args, vec!["--experimental"]);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.compiler.program, PathBuf::from("bal"));
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[compiler]
program = "/opt/ballerina/bin/bal"

[compiler.env]
JAVA_HOME = "/opt/jdk"
"#,
        )
        .unwrap();

        let config = Config::from_path(&path).unwrap();
        assert_eq!(
            config.compiler.program,
            PathBuf::from("/opt/ballerina/bin/bal")
        );
        assert_eq!(config.compiler.env["JAVA_HOME"], "/opt/jdk");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempdir().unwrap();
        let result = Config::from_path(&dir.path().join("missing.toml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }

    #[test]
    fn test_from_path_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "invalid toml [[[").unwrap();

        let result = Config::from_path(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }
}
