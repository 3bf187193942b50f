//! GLSL to SPIR-V compilation on top of `shaderc`.
//!
//! [`ShaderCompiler`] owns one `shaderc` compiler and compiles shader files
//! (or in-memory sources) for a given [`ShaderStage`], resolving `#include`
//! directives against the source's directory.

mod include;
mod stage;

pub use stage::ShaderStage;

use std::path::{Path, PathBuf};
use thiserror::Error;

const ENTRY_POINT: &str = "main";

#[derive(Debug, Error)]
pub enum ShaderToolsError {
    #[error("could not create shader compiler")]
    CompilerInit,
    #[error("unknown shader stage `{0}`")]
    UnknownStage(String),
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Compilation(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EnvVersion {
    #[default]
    Vulkan1_0,
    Vulkan1_1,
    Vulkan1_2,
}

impl From<EnvVersion> for shaderc::EnvVersion {
    fn from(version: EnvVersion) -> Self {
        match version {
            EnvVersion::Vulkan1_0 => shaderc::EnvVersion::Vulkan1_0,
            EnvVersion::Vulkan1_1 => shaderc::EnvVersion::Vulkan1_1,
            EnvVersion::Vulkan1_2 => shaderc::EnvVersion::Vulkan1_2,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationLevel {
    #[default]
    Zero,
    Size,
    Performance,
}

impl From<OptimizationLevel> for shaderc::OptimizationLevel {
    fn from(level: OptimizationLevel) -> Self {
        match level {
            OptimizationLevel::Zero => shaderc::OptimizationLevel::Zero,
            OptimizationLevel::Size => shaderc::OptimizationLevel::Size,
            OptimizationLevel::Performance => shaderc::OptimizationLevel::Performance,
        }
    }
}

/// Result of a successful compilation.
pub struct CompilationArtifact {
    inner: shaderc::CompilationArtifact,
}

impl CompilationArtifact {
    pub fn as_binary_u8(&self) -> &[u8] {
        self.inner.as_binary_u8()
    }

    pub fn warnings(&self) -> Option<String> {
        if self.inner.get_num_warnings() == 0 {
            None
        } else {
            Some(self.inner.get_warning_messages())
        }
    }
}

pub struct ShaderCompiler {
    compiler: shaderc::Compiler,
    env_version: EnvVersion,
    optimization_level: OptimizationLevel,
}

impl ShaderCompiler {
    pub fn new(
        env_version: EnvVersion,
        optimization_level: OptimizationLevel,
    ) -> Result<Self, ShaderToolsError> {
        let compiler = shaderc::Compiler::new().ok_or(ShaderToolsError::CompilerInit)?;
        Ok(Self {
            compiler,
            env_version,
            optimization_level,
        })
    }

    /// Reads `path` as GLSL text and compiles it for `stage`.
    pub fn compile_shader(
        &self,
        path: impl AsRef<Path>,
        stage: ShaderStage,
    ) -> Result<CompilationArtifact, ShaderToolsError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ShaderToolsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let root_dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.compile_in(&source, &path.to_string_lossy(), stage, root_dir)
    }

    /// Compiles in-memory GLSL. `name` shows up in diagnostics; includes
    /// resolve against the working directory.
    pub fn compile_source(
        &self,
        source: &str,
        name: &str,
        stage: ShaderStage,
    ) -> Result<CompilationArtifact, ShaderToolsError> {
        self.compile_in(source, name, stage, Path::new("."))
    }

    fn compile_in(
        &self,
        source: &str,
        name: &str,
        stage: ShaderStage,
        root_dir: &Path,
    ) -> Result<CompilationArtifact, ShaderToolsError> {
        let options = self.options(root_dir.to_path_buf())?;
        let inner = self
            .compiler
            .compile_into_spirv(source, stage.into(), name, ENTRY_POINT, Some(&options))
            .map_err(|err| match err {
                shaderc::Error::CompilationError(_, diagnostics) => {
                    ShaderToolsError::Compilation(diagnostics.trim_end().to_owned())
                }
                other => ShaderToolsError::Compilation(other.to_string()),
            })?;

        let artifact = CompilationArtifact { inner };
        if let Some(warnings) = artifact.warnings() {
            tracing::warn!(shader = name, "{}", warnings.trim_end());
        }
        tracing::debug!(
            shader = name,
            %stage,
            bytes = artifact.as_binary_u8().len(),
            "compiled shader"
        );
        Ok(artifact)
    }

    fn options(
        &self,
        root_dir: PathBuf,
    ) -> Result<shaderc::CompileOptions<'static>, ShaderToolsError> {
        let mut options = shaderc::CompileOptions::new().ok_or(ShaderToolsError::CompilerInit)?;
        options.set_target_env(
            shaderc::TargetEnv::Vulkan,
            shaderc::EnvVersion::from(self.env_version) as u32,
        );
        options.set_optimization_level(self.optimization_level.into());
        options.set_include_callback(move |requested, include_type, requesting, depth| {
            include::resolve_include(requested, include_type, requesting, depth, &root_dir)
        });
        Ok(options)
    }
}
