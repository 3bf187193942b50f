use shaderc::{IncludeType, ResolvedInclude};
use std::path::{Path, PathBuf};

const MAX_INCLUDE_DEPTH: usize = 32;

/// Resolves an `#include` the way `glslc` does: `"relative"` includes are
/// looked up next to the file that asked for them, `<standard>` includes
/// next to the root source file.
pub(crate) fn resolve_include(
    requested: &str,
    include_type: IncludeType,
    requesting: &str,
    depth: usize,
    root_dir: &Path,
) -> Result<ResolvedInclude, String> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(format!(
            "include depth limit of {MAX_INCLUDE_DEPTH} exceeded while including {requested}"
        ));
    }

    let path = include_path(requested, include_type, requesting, root_dir);
    let content = std::fs::read_to_string(&path)
        .map_err(|err| format!("could not read include {}: {err}", path.display()))?;
    Ok(ResolvedInclude {
        resolved_name: path.to_string_lossy().into_owned(),
        content,
    })
}

fn include_path(
    requested: &str,
    include_type: IncludeType,
    requesting: &str,
    root_dir: &Path,
) -> PathBuf {
    let base = match include_type {
        IncludeType::Relative => Path::new(requesting)
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(root_dir),
        IncludeType::Standard => root_dir,
    };
    base.join(requested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_include_follows_requesting_file() {
        let path = include_path(
            "common.glsl",
            IncludeType::Relative,
            "shaders/lib/lighting.glsl",
            Path::new("shaders"),
        );
        assert_eq!(path, Path::new("shaders/lib/common.glsl"));
    }

    #[test]
    fn relative_include_from_bare_name_uses_root() {
        let path = include_path(
            "common.glsl",
            IncludeType::Relative,
            "main.frag",
            Path::new("shaders"),
        );
        assert_eq!(path, Path::new("shaders/common.glsl"));
    }

    #[test]
    fn standard_include_uses_root() {
        let path = include_path(
            "common.glsl",
            IncludeType::Standard,
            "shaders/lib/lighting.glsl",
            Path::new("shaders"),
        );
        assert_eq!(path, Path::new("shaders/common.glsl"));
    }

    #[test]
    fn reads_included_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("common.glsl"), "#define ONE 1\n").unwrap();
        let requesting = dir.path().join("main.frag");

        let resolved = resolve_include(
            "common.glsl",
            IncludeType::Relative,
            &requesting.to_string_lossy(),
            1,
            dir.path(),
        )
        .unwrap();
        assert_eq!(resolved.content, "#define ONE 1\n");
        assert!(resolved.resolved_name.ends_with("common.glsl"));
    }

    #[test]
    fn missing_include_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_include("nope.glsl", IncludeType::Standard, "main.frag", 1, dir.path())
            .unwrap_err();
        assert!(err.contains("nope.glsl"), "{err}");
    }

    #[test]
    fn runaway_includes_are_cut_off() {
        let err = resolve_include(
            "self.glsl",
            IncludeType::Relative,
            "self.glsl",
            MAX_INCLUDE_DEPTH + 1,
            Path::new("."),
        )
        .unwrap_err();
        assert!(err.contains("depth limit"), "{err}");
    }
}
