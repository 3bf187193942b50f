use crate::{
    cli::Invocation,
    compiler::{CompileFailure, CompileShader},
    error::DriverError,
    output::{output_path, write_artifact},
    report::Reporter,
};
use std::path::{Path, PathBuf};

/// What happened to each input of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<DriverError>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compiles every input of an [`Invocation`] one after the other.
///
/// A failing file is reported and skipped; the remaining files are still
/// compiled and the failure ends up in the returned [`BatchReport`].
pub struct Driver<C, R> {
    compiler: C,
    reporter: R,
}

impl<C: CompileShader, R: Reporter> Driver<C, R> {
    pub fn new(compiler: C, reporter: R) -> Self {
        Self { compiler, reporter }
    }

    pub fn run(&mut self, invocation: &Invocation) -> BatchReport {
        self.banner(invocation);

        let mut report = BatchReport::default();
        for input in &invocation.input_paths {
            self.reporter
                .report(&format!("\n-> Working on {}...", input.display()));
            match self.compile_one(input, &invocation.shader_stage) {
                Ok(output) => {
                    self.reporter
                        .report(&format!("-> {} - done.", input.display()));
                    report.written.push(output);
                }
                Err(err) => {
                    tracing::debug!(input = %input.display(), error = ?err, "shader failed");
                    self.reporter.error(&format!("-> {err}"));
                    report.failures.push(err);
                }
            }
        }

        self.summary(&report);
        report
    }

    #[cfg(test)]
    pub(crate) fn reporter(&self) -> &R {
        &self.reporter
    }

    fn banner(&mut self, invocation: &Invocation) {
        let files = invocation
            .input_paths
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.reporter
            .report(&format!("\nIn script:\n    {}", invocation.program));
        self.reporter
            .report(&format!("Computing shaders:\n    [{files}]"));
        self.reporter
            .report(&format!("of type:\n    {}", invocation.shader_stage));
    }

    fn summary(&mut self, report: &BatchReport) {
        if report.is_success() {
            self.reporter.report("\nDone.\n");
            return;
        }

        let failed = report
            .failures
            .iter()
            .filter_map(DriverError::path)
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.reporter.report(&format!(
            "\nDone, {} of {} shader(s) failed.\n",
            report.failures.len(),
            report.failures.len() + report.written.len()
        ));
        self.reporter.error(&format!("failed: [{failed}]"));
    }

    fn compile_one(&mut self, input: &Path, stage: &str) -> Result<PathBuf, DriverError> {
        let bytes = self
            .compiler
            .compile(input, stage)
            .map_err(|failure| match failure {
                CompileFailure::Read(source) => DriverError::InputAccess {
                    path: input.to_path_buf(),
                    source,
                },
                CompileFailure::Rejected(diagnostics) => DriverError::Compilation {
                    path: input.to_path_buf(),
                    diagnostics,
                },
            })?;

        let output = output_path(input);
        write_artifact(&output, &bytes).map_err(|source| DriverError::OutputWrite {
            path: output.clone(),
            source,
        })?;
        tracing::debug!(output = %output.display(), bytes = bytes.len(), "wrote artifact");
        Ok(output)
    }
}
