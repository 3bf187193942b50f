use crate::error::DriverError;
use clap::{CommandFactory, Parser};
use std::{ffi::OsString, path::PathBuf};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Compiles GLSL shaders to SPIR-V, writing <INPUT>.spv next to each input",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Arguments {
    /// Shader stage passed to the compiler (vert, frag, comp, geom, tesc, tese, ...)
    #[arg(value_name = "SHADER_STAGE")]
    shader_stage: String,
    /// GLSL source files, compiled in the order given
    #[arg(value_name = "INPUT", trailing_var_arg = true, allow_hyphen_values = true)]
    inputs: Vec<PathBuf>,
}

/// One run of the tool, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub shader_stage: String,
    pub input_paths: Vec<PathBuf>,
}

#[derive(Debug)]
pub enum Command {
    Compile(Invocation),
    /// `--help` or `--version`: print the text and stop.
    Info(String),
}

pub fn parse<I, T>(argv: I) -> Result<Command, DriverError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = argv
        .first()
        .map(|program| program.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());

    // Flags only count in the stage position; every later argument is a path.
    match argv.get(1).and_then(|arg| arg.to_str()) {
        Some("-h" | "--help") => {
            return Ok(Command::Info(Arguments::command().render_help().to_string()));
        }
        Some("-V" | "--version") => {
            return Ok(Command::Info(Arguments::command().render_version()));
        }
        _ => {}
    }

    let arguments = Arguments::try_parse_from(&argv)
        .map_err(|err| DriverError::Usage(err.render().to_string()))?;
    Ok(Command::Compile(Invocation {
        program,
        shader_stage: arguments.shader_stage,
        input_paths: arguments.inputs,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(argv: &[&str]) -> Invocation {
        match parse(argv).unwrap() {
            Command::Compile(invocation) => invocation,
            Command::Info(text) => panic!("unexpected info output: {text}"),
        }
    }

    #[test]
    fn stage_then_inputs_in_order() {
        let invocation = invocation(&["glsl-to-spv", "frag", "b.frag", "a.frag", "c.frag"]);
        assert_eq!(invocation.program, "glsl-to-spv");
        assert_eq!(invocation.shader_stage, "frag");
        assert_eq!(
            invocation.input_paths,
            vec![
                PathBuf::from("b.frag"),
                PathBuf::from("a.frag"),
                PathBuf::from("c.frag")
            ]
        );
    }

    #[test]
    fn no_inputs_is_not_an_error() {
        let invocation = invocation(&["glsl-to-spv", "vert"]);
        assert!(invocation.input_paths.is_empty());
    }

    #[test]
    fn stage_is_passed_through_unvalidated() {
        let invocation = invocation(&["glsl-to-spv", "not-a-stage", "a.glsl"]);
        assert_eq!(invocation.shader_stage, "not-a-stage");
    }

    #[test]
    fn missing_stage_is_a_usage_error() {
        for argv in [&["glsl-to-spv"][..], &[][..]] {
            match parse(argv) {
                Err(DriverError::Usage(message)) => {
                    assert!(message.contains("SHADER_STAGE"), "{message}")
                }
                other => panic!("expected usage error, got {other:?}"),
            }
        }
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(matches!(
            parse(["glsl-to-spv", "--help"]),
            Ok(Command::Info(_))
        ));
    }

    #[test]
    fn version_is_not_an_error() {
        assert!(matches!(
            parse(["glsl-to-spv", "--version"]),
            Ok(Command::Info(text)) if text.contains(env!("CARGO_PKG_VERSION"))
        ));
    }

    #[test]
    fn inputs_may_start_with_a_dash() {
        let invocation = invocation(&["glsl-to-spv", "frag", "a.frag", "-b.frag"]);
        assert_eq!(
            invocation.input_paths,
            vec![PathBuf::from("a.frag"), PathBuf::from("-b.frag")]
        );
    }

    #[test]
    fn flag_spellings_after_the_stage_are_inputs() {
        let invocation = invocation(&["glsl-to-spv", "vert", "--version", "a.vert", "--help"]);
        assert_eq!(invocation.shader_stage, "vert");
        assert_eq!(
            invocation.input_paths,
            vec![
                PathBuf::from("--version"),
                PathBuf::from("a.vert"),
                PathBuf::from("--help")
            ]
        );
    }
}
