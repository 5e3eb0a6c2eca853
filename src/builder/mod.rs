//! Build configurator and invoker
//!
//! Turns caller build parameters into a [`BuildConfiguration`], obtains a
//! compilation service for it from the injected factory, and calls the build
//! entry point matching the requested [`BuildTarget`]. Compiler failures are
//! returned exactly as the service reported them.

use std::path::Path;
use tracing::{debug, info};

use crate::compiler::{CompilationService, CompilerFactory};
use crate::options::{BuildConfiguration, CompilerOptionName, CompilerPhase};


/// Error type of the services produced by factory `F`
pub type ServiceError<F> = <<F as CompilerFactory>::Service as CompilationService>::Error;

/// Phase every build driven from here runs up to
pub const BUILD_PHASE: CompilerPhase = CompilerPhase::CodeGen;

/// What a single build invocation compiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildTarget {
    /// One package under the source root, with explicit artifact routing
    Package {
        id: String,
        target_path: String,
        build_compiled_package: bool,
    },
    /// Every package under the source root; the compiler picks the outputs
    WholeRoot,
}

/// Assemble the configuration a build of `target` would run with
pub fn configure(
    source_root: &Path,
    target: &BuildTarget,
    offline: bool,
    lock_enabled: bool,
) -> BuildConfiguration {
    let mut config = BuildConfiguration::new();
    config.put(CompilerOptionName::ProjectDir, source_root);
    config.put(CompilerOptionName::CompilerPhase, BUILD_PHASE.as_str());
    if let BuildTarget::Package {
        build_compiled_package,
        ..
    } = target
    {
        config.put(
            CompilerOptionName::BuildCompiledPackage,
            build_compiled_package.to_string(),
        );
    }
    config.put(CompilerOptionName::Offline, offline.to_string());
    config.put(CompilerOptionName::LockEnabled, lock_enabled.to_string());
    config
}

/// Drives builds through compilation services obtained from a factory
pub struct BuildInvoker<F> {
    factory: F,
}

impl<F: CompilerFactory> BuildInvoker<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Build one package and write its artifacts to `target_path`
    pub fn build_package(
        &self,
        source_root: &Path,
        package: &str,
        target_path: &str,
        build_compiled_pkg: bool,
        offline: bool,
        lock_enabled: bool,
    ) -> Result<(), ServiceError<F>> {
        let target = BuildTarget::Package {
            id: package.to_string(),
            target_path: target_path.to_string(),
            build_compiled_package: build_compiled_pkg,
        };
        self.run(source_root, &target, offline, lock_enabled)
    }

    /// Build everything under `source_root`
    pub fn build_root(
        &self,
        source_root: &Path,
        offline: bool,
        lock_enabled: bool,
    ) -> Result<(), ServiceError<F>> {
        self.run(source_root, &BuildTarget::WholeRoot, offline, lock_enabled)
    }

    fn run(
        &self,
        source_root: &Path,
        target: &BuildTarget,
        offline: bool,
        lock_enabled: bool,
    ) -> Result<(), ServiceError<F>> {
        let config = configure(source_root, target, offline, lock_enabled);
        match target {
            BuildTarget::Package { id, target_path, .. } => info!(
                "Building package {} under {:?} into {}",
                id, source_root, target_path
            ),
            BuildTarget::WholeRoot => info!("Building all packages under {:?}", source_root),
        }
        debug!(
            "Build configuration: {}",
            serde_json::to_string(&config).unwrap_or_default()
        );

        let service = self.factory.create(config);
        let result = match target {
            BuildTarget::Package {
                id, target_path, ..
            } => service.build_package(id, target_path),
            BuildTarget::WholeRoot => service.build(),
        };
        if result.is_err() {
            debug!("Compiler reported a failure");
        }
        result
    }
}

/// Build one package with services from `factory`
pub fn compile_and_write<F: CompilerFactory>(
    factory: F,
    source_root: &Path,
    package: &str,
    target_path: &str,
    build_compiled_pkg: bool,
    offline: bool,
    lock_enabled: bool,
) -> Result<(), ServiceError<F>> {
    BuildInvoker::new(factory).build_package(
        source_root,
        package,
        target_path,
        build_compiled_pkg,
        offline,
        lock_enabled,
    )
}

/// Build everything under `source_root` with a service from `factory`
pub fn compile_and_write_all<F: CompilerFactory>(
    factory: F,
    source_root: &Path,
    offline: bool,
    lock_enabled: bool,
) -> Result<(), ServiceError<F>> {
    BuildInvoker::new(factory).build_root(source_root, offline, lock_enabled)
}
