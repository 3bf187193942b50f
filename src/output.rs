use std::{
    ffi::OsString,
    io::Write,
    path::{Path, PathBuf},
};

pub const SPIRV_EXTENSION: &str = "spv";

/// `shaders/a.frag` -> `shaders/a.frag.spv`. The existing extension is kept.
pub fn output_path(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(".");
    path.push(SPIRV_EXTENSION);
    PathBuf::from(path)
}

/// Writes `bytes` to `path` so that `path` only ever holds a complete file:
/// the data goes to a temporary file in the same directory which is then
/// renamed over the destination. On failure the temporary file is removed
/// and any previous file at `path` is left as it was.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = tempfile::Builder::new()
        .prefix(".spv-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_appends_extension() {
        assert_eq!(
            output_path(Path::new("shaders/a.frag")),
            PathBuf::from("shaders/a.frag.spv")
        );
        assert_eq!(output_path(Path::new("noext")), PathBuf::from("noext.spv"));
    }

    #[test]
    fn writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.frag.spv");
        let bytes = [0x03, 0x02, 0x23, 0x07, 0x00, 0x00, 0x01, 0x00];

        write_artifact(&path, &bytes).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.frag.spv");
        std::fs::write(&path, b"a much longer stale artifact").unwrap();

        write_artifact(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn leaves_no_temporary_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(&dir.path().join("a.spv"), b"bytes").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![OsString::from("a.spv")]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("a.spv");
        assert!(write_artifact(&path, b"bytes").is_err());
        assert!(!path.exists());
    }
}
