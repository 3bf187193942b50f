use shader_tools::{ShaderCompiler, ShaderStage, ShaderToolsError};
use std::path::Path;

/// Why a single file did not compile.
#[derive(Debug)]
pub enum CompileFailure {
    /// The source could not be read.
    Read(std::io::Error),
    /// The compiler rejected the source or the stage; carries its diagnostics.
    Rejected(String),
}

/// The shader compiler as seen by the driver: a path and an opaque stage
/// tag in, SPIR-V bytes out. Deciding which tags are valid is up to the
/// implementation.
pub trait CompileShader {
    fn compile(&mut self, path: &Path, stage: &str) -> Result<Vec<u8>, CompileFailure>;
}

impl<C: CompileShader + ?Sized> CompileShader for &mut C {
    fn compile(&mut self, path: &Path, stage: &str) -> Result<Vec<u8>, CompileFailure> {
        (**self).compile(path, stage)
    }
}

impl CompileShader for ShaderCompiler {
    fn compile(&mut self, path: &Path, stage: &str) -> Result<Vec<u8>, CompileFailure> {
        let stage: ShaderStage = stage.parse().map_err(rejected)?;
        let artifact = self.compile_shader(path, stage).map_err(|err| match err {
            ShaderToolsError::Read { source, .. } => CompileFailure::Read(source),
            other => rejected(other),
        })?;
        Ok(artifact.as_binary_u8().to_vec())
    }
}

fn rejected(err: ShaderToolsError) -> CompileFailure {
    CompileFailure::Rejected(err.to_string())
}
