/// Configuration keys understood by the compiler
pub mod option {
    /// Root directory under which sources and packages are resolved
    pub const PROJECT_DIR: &str = "projectDirectory";

    /// Pipeline phase the compiler runs up to
    pub const COMPILER_PHASE: &str = "compilerPhase";

    /// Whether a distributable compiled-package artifact is written
    pub const BUILD_COMPILED_PACKAGE: &str = "buildCompiledPackage";

    /// Disables network dependency fetching
    pub const OFFLINE: &str = "offline";

    /// Requires resolved dependency versions to match the lock record
    pub const LOCK_ENABLED: &str = "lockEnabled";
}

/// Compiler executable defaults
pub mod program {
    /// Compiler executable used when no config file overrides it
    pub const DEFAULT: &str = "bal";

    /// Subcommand that runs the build pipeline
    pub const BUILD_SUBCOMMAND: &str = "build";

    /// Flag introducing the artifact destination of a package build
    pub const TARGET_FLAG: &str = "--target";
}

/// User config file location
pub mod config {
    /// Directory under the platform config dir
    pub const DIR_NAME: &str = "packforge";

    /// File name inside [`DIR_NAME`]
    pub const FILE_NAME: &str = "config.toml";
}
