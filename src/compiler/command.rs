//! Compiler service backed by an external executable
//!
//! Each option of the build configuration is passed as `--<key>=<value>`, in
//! the order the options were set, after the `build` subcommand.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, error, info};

use super::{CompilationService, CompilerFactory};
use crate::config::CompilerConfig;
use crate::constants::program;
use crate::options::{BuildConfiguration, CompilerOptionName};

pub struct CommandCompiler {
    config: BuildConfiguration,
    compiler: CompilerConfig,
}

impl CommandCompiler {
    pub fn new(config: BuildConfiguration, compiler: CompilerConfig) -> Self {
        Self { config, compiler }
    }

    pub fn configuration(&self) -> &BuildConfiguration {
        &self.config
    }

    /// Arguments passed to the compiler, without the program itself
    pub fn command_args(&self, package: Option<(&str, &str)>) -> Vec<OsString> {
        let mut args = vec![OsString::from(program::BUILD_SUBCOMMAND)];
        args.extend(self.config.iter().map(|(key, value)| {
            let mut arg = OsString::from(format!("--{}=", key));
            arg.push(value);
            arg
        }));
        args.extend(self.compiler.args.iter().map(OsString::from));
        if let Some((package, target_path)) = package {
            args.push(package.into());
            args.push(program::TARGET_FLAG.into());
            args.push(target_path.into());
        }
        args
    }

    fn resolve_program(&self) -> PathBuf {
        let program = &self.compiler.program;
        if program.components().count() > 1 {
            return program.clone();
        }
        which::which(program).unwrap_or_else(|_| program.clone())
    }

    fn run(&self, package: Option<(&str, &str)>) -> Result<()> {
        let program = self.resolve_program();
        let mut cmd = Command::new(&program);
        cmd.args(self.command_args(package));
        cmd.envs(&self.compiler.env);
        if let Some(dir) = self.config.get(CompilerOptionName::ProjectDir) {
            cmd.current_dir(dir);
        }

        debug!("Running command: {:?}", cmd);
        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute compiler {}", program.display()))?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Compiler exited with {}", output.status);
            error!("stdout:\n{}", stdout);
            error!("stderr:\n{}", stderr);
            anyhow::bail!("Compilation failed ({}): {}", output.status, stderr.trim());
        }

        info!("Compiler finished successfully");
        Ok(())
    }
}

impl CompilationService for CommandCompiler {
    type Error = anyhow::Error;

    fn build_package(&self, package: &str, target_path: &str) -> Result<()> {
        self.run(Some((package, target_path)))
    }

    fn build(&self) -> Result<()> {
        self.run(None)
    }
}

/// Creates a [`CommandCompiler`] per build configuration
#[derive(Debug, Clone, Default)]
pub struct CommandCompilerFactory {
    compiler: CompilerConfig,
}

impl CommandCompilerFactory {
    pub fn new(compiler: CompilerConfig) -> Self {
        Self { compiler }
    }
}

impl CompilerFactory for CommandCompilerFactory {
    type Service = CommandCompiler;

    fn create(&self, config: BuildConfiguration) -> CommandCompiler {
        CommandCompiler::new(config, self.compiler.clone())
    }
}
