//! JSON loaders for evaluation inputs.
//!
//! Every loader reads the whole file into memory. Failures carry the offending
//! path so the caller can abort with a useful message.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{BodySize, CandidatePath, Error, Result, SegToGt};

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a `[[body, size], ...]` list. Order is preserved; sorting is the
/// producer's responsibility and is not verified here.
pub fn load_body_sizes(path: &Path) -> Result<Vec<BodySize>> {
    let sizes: Vec<BodySize> = read_json(path)?;
    for (index, s) in sizes.iter().enumerate() {
        if !s.size.is_finite() || s.size < 0.0 {
            return Err(Error::InvalidRecord {
                path: path.to_path_buf(),
                index,
                reason: format!("body {} has invalid size {}", s.body, s.size),
            });
        }
    }
    Ok(sizes)
}

pub fn load_paths(path: &Path) -> Result<Vec<CandidatePath>> {
    let paths: Vec<CandidatePath> = read_json(path)?;
    for (index, p) in paths.iter().enumerate() {
        if !p.confidence.is_finite() {
            return Err(Error::InvalidRecord {
                path: path.to_path_buf(),
                index,
                reason: format!("path {}-{} has non-finite confidence", p.a, p.b),
            });
        }
    }
    Ok(paths)
}

pub fn load_adjacency(path: &Path) -> Result<Vec<SegToGt>> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{load_adjacency, load_body_sizes, load_paths};
    use crate::{BodySize, CandidatePath, Error, SegToGt};

    fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let p = dir.path().join(name);
        fs::write(&p, body).expect("write fixture");
        p
    }

    #[test]
    fn loads_all_three_shapes() {
        let dir = TempDir::new().expect("tempdir");
        let sizes = write(&dir, "big.json", "[[5, 900], [2, 40]]");
        let paths = write(&dir, "paths.json", "[[2, 5, 0.8]]");
        let adj = write(&dir, "gt.json", "[[2, 100], [5, 100]]");

        assert_eq!(
            load_body_sizes(&sizes).expect("sizes"),
            vec![BodySize::new(5, 900.0), BodySize::new(2, 40.0)]
        );
        assert_eq!(
            load_paths(&paths).expect("paths"),
            vec![CandidatePath::new(2, 5, 0.8)]
        );
        assert_eq!(
            load_adjacency(&adj).expect("adjacency"),
            vec![SegToGt::new(2, 100), SegToGt::new(5, 100)]
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let err = load_paths(&dir.path().join("absent.json")).expect_err("must fail");
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let dir = TempDir::new().expect("tempdir");
        let p = write(&dir, "bad.json", "[[1, 2]");
        let err = load_adjacency(&p).expect_err("must fail");
        assert!(matches!(err, Error::Json { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn negative_size_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let p = write(&dir, "syn.json", "[[1, 3], [2, -1]]");
        let err = load_body_sizes(&p).expect_err("must fail");
        assert!(matches!(err, Error::InvalidRecord { index: 1, .. }));
    }
}
