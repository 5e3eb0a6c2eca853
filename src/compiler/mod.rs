//! Contract with the external compiler
//!
//! The compiler pipeline itself lives outside this crate. It is reached
//! through a [`CompilerFactory`], which turns one fully-populated
//! [`BuildConfiguration`] into one [`CompilationService`]. There is no shared
//! lookup table: every configuration gets its own service.

use crate::options::BuildConfiguration;

pub mod command;

pub use command::{CommandCompiler, CommandCompilerFactory};

/// A compiler bound to a single build configuration
pub trait CompilationService {
    /// Failure reported by the compiler
    type Error;

    /// Build one package and route its artifacts to `target_path`
    fn build_package(&self, package: &str, target_path: &str) -> Result<(), Self::Error>;

    /// Build every package under the configured project directory
    fn build(&self) -> Result<(), Self::Error>;
}

/// Creates a compilation service for a configuration
pub trait CompilerFactory {
    type Service: CompilationService;

    fn create(&self, config: BuildConfiguration) -> Self::Service;
}

impl<F, S> CompilerFactory for F
where
    F: Fn(BuildConfiguration) -> S,
    S: CompilationService,
{
    type Service = S;

    fn create(&self, config: BuildConfiguration) -> S {
        self(config)
    }
}
