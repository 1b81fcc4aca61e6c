//! Archive mounting.
//!
//! Extracts the configured tar (or tar.gz) archive into the sandbox
//! directory and hands back the directory that becomes the initial
//! working directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use husk_types::{HuskError, Result};

/// Extract `archive` under `dest`, creating `dest` if needed.
///
/// Compression is chosen by extension: `.tar` is read as-is, `.tar.gz`
/// and `.tgz` through a gzip decoder.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dest)?;
    let file = File::open(archive)
        .map_err(|e| HuskError::Mount(format!("cannot open {}: {e}", archive.display())))?;
    let name = archive.to_string_lossy();
    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        tar::Archive::new(GzDecoder::new(file)).unpack(dest)?;
    } else if name.ends_with(".tar") {
        tar::Archive::new(file).unpack(dest)?;
    } else {
        return Err(HuskError::Mount(format!(
            "unsupported archive format: {}",
            archive.display()
        )));
    }
    Ok(dest.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Build a small tar in memory: a.txt at the root, dir/b.txt below.
    fn sample_tar() -> Vec<u8> {
        let mut builder = tar::Builder::new(Vec::new());
        for (path, data) in [("a.txt", &b"alpha"[..]), ("dir/b.txt", &b"beta"[..])] {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, path, data).unwrap();
        }
        builder.into_inner().unwrap()
    }

    #[test]
    fn extracts_plain_tar() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("fs.tar");
        std::fs::write(&archive, sample_tar()).unwrap();

        let dest = tmp.path().join("sandbox");
        let root = extract_archive(&archive, &dest).unwrap();
        assert_eq!(root, dest);
        assert_eq!(std::fs::read(root.join("a.txt")).unwrap(), b"alpha");
        assert_eq!(std::fs::read(root.join("dir/b.txt")).unwrap(), b"beta");
    }

    #[test]
    fn extracts_gzipped_tar() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("fs.tar.gz");
        let mut enc =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(&sample_tar()).unwrap();
        std::fs::write(&archive, enc.finish().unwrap()).unwrap();

        let dest = tmp.path().join("sandbox");
        let root = extract_archive(&archive, &dest).unwrap();
        assert!(root.join("dir/b.txt").exists());
    }

    #[test]
    fn rejects_unknown_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("fs.zip");
        std::fs::write(&archive, b"not a tar").unwrap();
        let err = extract_archive(&archive, &tmp.path().join("sandbox")).unwrap_err();
        assert!(format!("{err}").contains("unsupported archive format"));
    }

    #[test]
    fn missing_archive_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err =
            extract_archive(Path::new("/no/such/fs.tar"), &tmp.path().join("sandbox"))
                .unwrap_err();
        assert!(format!("{err}").contains("cannot open"));
    }
}
