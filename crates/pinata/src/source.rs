//! Collects the files of a `pinFileToIPFS` request.

use {
    crate::Error,
    std::path::{Path, PathBuf},
    walkdir::WalkDir,
};

#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    /// Base name of the pinned path, used as the default pin name and as the
    /// directory prefix of every file name.
    pub name: String,
    pub files: Vec<SourceFile>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Name sent to Pinata, `<base name>/<path relative to the source>` with
    /// `/` separators. Pinata rebuilds the directory structure from it.
    pub name: String,
}

/// Lists every file below `path` in a stable order. A file path yields a
/// single entry named after the file.
pub fn collect(path: &Path) -> Result<Source, Error> {
    let io_error = |source| Error::Io {
        path: path.to_owned(),
        source,
    };
    let metadata = std::fs::metadata(path).map_err(io_error)?;
    let name = base_name(path).map_err(io_error)?;

    if metadata.is_file() {
        return Ok(Source {
            files: vec![SourceFile {
                path: path.to_owned(),
                name: name.clone(),
            }],
            name,
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(path) else {
            continue;
        };
        let mut file_name = name.clone();
        for component in relative {
            file_name.push('/');
            file_name.push_str(&component.to_string_lossy());
        }
        files.push(SourceFile {
            path: entry.into_path(),
            name: file_name,
        });
    }

    if files.is_empty() {
        return Err(Error::EmptySource(path.to_owned()));
    }
    Ok(Source { name, files })
}

/// `./metadata` and `metadata/` both name `metadata`; paths like `.` are
/// resolved first.
fn base_name(path: &Path) -> std::io::Result<String> {
    if let Some(name) = path.file_name() {
        return Ok(name.to_string_lossy().into_owned());
    }
    let canonical = path.canonicalize()?;
    Ok(canonical
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string()))
}
