//! Batch GLSL to SPIR-V compiler.
//!
//! `glsl-to-spv <SHADER_STAGE> <INPUT>...` compiles every input for the
//! given stage and writes the module next to it as `<INPUT>.spv`.

pub mod cli;
pub mod compiler;
pub mod driver;
pub mod error;
pub mod output;
pub mod report;

use cli::Command;
use compiler::CompileShader;
use driver::Driver;
use error::DriverError;
use report::{ConsoleReporter, Reporter};
use shader_tools::{EnvVersion, OptimizationLevel, ShaderCompiler};
use std::ffi::OsString;

pub const ENV_VERSION: EnvVersion = EnvVersion::Vulkan1_0;
pub const OPTIMIZATION_LEVEL: OptimizationLevel = OptimizationLevel::Zero;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    UsageError,
    Failed,
}

impl RunStatus {
    pub fn code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failed => 1,
            RunStatus::UsageError => 2,
        }
    }
}

/// Runs the tool over `argv` with the `shaderc` backed compiler, printing
/// to the console.
pub fn run<I, T>(argv: I) -> RunStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with(argv, &mut ConsoleReporter, || {
        ShaderCompiler::new(ENV_VERSION, OPTIMIZATION_LEVEL)
            .map_err(|err| DriverError::CompilerInit(err.to_string()))
    })
}

/// Like [`run`], with the reporter and the compiler supplied by the caller.
/// `make_compiler` is only called once the arguments are known to be valid.
pub fn run_with<I, T, R, C, F>(argv: I, reporter: &mut R, make_compiler: F) -> RunStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: Reporter + ?Sized,
    C: CompileShader,
    F: FnOnce() -> Result<C, DriverError>,
{
    let invocation = match cli::parse(argv) {
        Ok(Command::Compile(invocation)) => invocation,
        Ok(Command::Info(text)) => {
            reporter.report(text.trim_end());
            return RunStatus::Success;
        }
        Err(err) => {
            reporter.error(err.to_string().trim_end());
            return RunStatus::UsageError;
        }
    };

    let compiler = match make_compiler() {
        Ok(compiler) => compiler,
        Err(err) => {
            reporter.error(&err.to_string());
            return RunStatus::Failed;
        }
    };

    let report = Driver::new(compiler, reporter).run(&invocation);
    if report.is_success() {
        RunStatus::Success
    } else {
        RunStatus::Failed
    }
}
