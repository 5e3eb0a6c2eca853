pub mod builder;
pub mod compiler;
pub mod config;
pub mod constants;
pub mod options;

pub use anyhow::Result;
pub use builder::{compile_and_write, compile_and_write_all, BuildInvoker, BuildTarget};
pub use compiler::{CompilationService, CompilerFactory};
pub use options::{BuildConfiguration, CompilerOptionName, CompilerPhase};
