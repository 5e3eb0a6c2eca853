//! Compiler options and the per-invocation build configuration
//!
//! A [`BuildConfiguration`] is an insertion-ordered set of string-encoded
//! options. It is assembled once per build and then handed to the compiler by
//! value, so no option can change after the compiler has been obtained.
//! Values are kept as OS strings so paths survive unchanged.

use anyhow::{bail, Context, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::str::FromStr;

use crate::constants::option;

#[cfg(test)]
mod tests;

/// Name of a recognized compiler option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilerOptionName {
    ProjectDir,
    CompilerPhase,
    BuildCompiledPackage,
    Offline,
    LockEnabled,
}

impl CompilerOptionName {
    pub const ALL: [CompilerOptionName; 5] = [
        CompilerOptionName::ProjectDir,
        CompilerOptionName::CompilerPhase,
        CompilerOptionName::BuildCompiledPackage,
        CompilerOptionName::Offline,
        CompilerOptionName::LockEnabled,
    ];

    /// Key under which the option is passed to the compiler
    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerOptionName::ProjectDir => option::PROJECT_DIR,
            CompilerOptionName::CompilerPhase => option::COMPILER_PHASE,
            CompilerOptionName::BuildCompiledPackage => option::BUILD_COMPILED_PACKAGE,
            CompilerOptionName::Offline => option::OFFLINE,
            CompilerOptionName::LockEnabled => option::LOCK_ENABLED,
        }
    }
}

impl fmt::Display for CompilerOptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompilerOptionName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .with_context(|| format!("Unknown compiler option: {}", s))
    }
}

/// Pipeline checkpoints, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompilerPhase {
    Define,
    TypeCheck,
    CodeAnalyze,
    Desugar,
    CodeGen,
}

impl CompilerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerPhase::Define => "DEFINE",
            CompilerPhase::TypeCheck => "TYPE_CHECK",
            CompilerPhase::CodeAnalyze => "CODE_ANALYZE",
            CompilerPhase::Desugar => "DESUGAR",
            CompilerPhase::CodeGen => "CODE_GEN",
        }
    }

    /// Whether running the pipeline up to `self` also runs `other`
    pub fn includes(&self, other: CompilerPhase) -> bool {
        other <= *self
    }
}

impl fmt::Display for CompilerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompilerPhase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DEFINE" => Ok(CompilerPhase::Define),
            "TYPE_CHECK" => Ok(CompilerPhase::TypeCheck),
            "CODE_ANALYZE" => Ok(CompilerPhase::CodeAnalyze),
            "DESUGAR" => Ok(CompilerPhase::Desugar),
            "CODE_GEN" => Ok(CompilerPhase::CodeGen),
            _ => bail!("Unknown compiler phase: {}", s),
        }
    }
}

/// Options for a single build invocation, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfiguration {
    entries: Vec<(CompilerOptionName, OsString)>,
}

impl BuildConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option. An existing key keeps its position and takes the new value.
    pub fn put(&mut self, name: CompilerOptionName, value: impl Into<OsString>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: CompilerOptionName, value: impl Into<OsString>) -> Self {
        self.put(name, value);
        self
    }

    pub fn get(&self, name: CompilerOptionName) -> Option<&OsStr> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_os_str())
    }

    /// Text value of an option. `None` when unset or not valid UTF-8.
    pub fn get_str(&self, name: CompilerOptionName) -> Option<&str> {
        self.get(name).and_then(OsStr::to_str)
    }

    pub fn contains(&self, name: CompilerOptionName) -> bool {
        self.get(name).is_some()
    }

    /// Read a boolean option. `None` when the option was never set.
    pub fn get_bool(&self, name: CompilerOptionName) -> Result<Option<bool>> {
        self.get(name)
            .map(|value| {
                value
                    .to_str()
                    .and_then(|text| text.parse::<bool>().ok())
                    .with_context(|| format!("Option {} is not a boolean: {:?}", name, value))
            })
            .transpose()
    }

    pub fn phase(&self) -> Result<Option<CompilerPhase>> {
        self.get(CompilerOptionName::CompilerPhase)
            .map(|value| {
                value
                    .to_str()
                    .with_context(|| format!("Unknown compiler phase: {:?}", value))
                    .and_then(str::parse::<CompilerPhase>)
            })
            .transpose()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CompilerOptionName, &OsStr)> {
        self.entries
            .iter()
            .map(|(key, value)| (*key, value.as_os_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for BuildConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), &value.to_string_lossy())?;
        }
        map.end()
    }
}
