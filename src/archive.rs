// Archiving module: zips a build directory so its contents sit at the
// archive root (the directory itself is not nested inside the zip).

use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::Path;

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;

/// Zip every file under `input_dir` into `output_path` at maximum deflate
/// compression, preserving paths relative to `input_dir`. Returns the size
/// of the finished archive in bytes, after the file has been flushed to
/// disk.
///
/// A file that vanishes between discovery and read is logged and skipped;
/// any other filesystem or compression failure aborts the archive.
pub fn archive_directory(input_dir: &Path, output_path: &Path) -> Result<u64> {
    let output = File::create(output_path)?;
    let mut writer = ZipWriter::new(output);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    for entry in WalkDir::new(input_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.io_error().map(io::Error::kind) == Some(ErrorKind::NotFound) => {
                eprintln!("warning: skipping entry that vanished while archiving: {err}");
                continue;
            }
            Err(err) => return Err(io::Error::from(err).into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(input_dir)
            .expect("walkdir yields paths under its root");
        // Zip entry names are UTF-8 with forward slashes; a name this
        // encoding cannot represent is skipped like any other unreadable
        // entry rather than mangled.
        let name = match rel.to_str() {
            Some(rel) => rel.replace('\\', "/"),
            None => {
                eprintln!(
                    "warning: skipping {}, file name is not valid UTF-8",
                    rel.to_string_lossy()
                );
                continue;
            }
        };

        let mut source = match File::open(entry.path()) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                eprintln!("warning: skipping {name}, it vanished while archiving: {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        writer.start_file(name, options)?;
        io::copy(&mut source, &mut writer)?;
    }

    // `finish` writes the central directory; sync before reporting so the
    // caller only proceeds once the archive is fully on disk.
    let output = writer.finish()?;
    output.sync_all()?;
    Ok(output.metadata()?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use tempfile::tempdir;
    use zip::ZipArchive;

    #[test]
    fn archives_directory_contents_at_the_root() {
        let dir = tempdir().unwrap();
        let build = dir.path().join("build");
        fs::create_dir_all(build.join("sub")).unwrap();
        fs::write(build.join("a.txt"), "alpha").unwrap();
        fs::write(build.join("sub").join("b.txt"), "beta").unwrap();

        let out = dir.path().join("bundle.zip");
        let bytes = archive_directory(&build, &out).unwrap();
        assert_eq!(bytes, fs::metadata(&out).unwrap().len());

        let mut archive = ZipArchive::new(File::open(&out).unwrap()).unwrap();
        let mut names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["a.txt", "sub/b.txt"]);

        let mut content = String::new();
        archive
            .by_name("sub/b.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "beta");
    }

    #[test]
    fn empty_directory_produces_a_valid_empty_archive() {
        let dir = tempdir().unwrap();
        let build = dir.path().join("build");
        fs::create_dir(&build).unwrap();

        let out = dir.path().join("bundle.zip");
        archive_directory(&build, &out).unwrap();

        let archive = ZipArchive::new(File::open(&out).unwrap()).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_names_are_skipped_not_mangled() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let build = dir.path().join("build");
        fs::create_dir(&build).unwrap();
        fs::write(build.join("a.txt"), "alpha").unwrap();
        fs::write(build.join(OsStr::from_bytes(b"b\xff.txt")), "beta").unwrap();

        let out = dir.path().join("bundle.zip");
        archive_directory(&build, &out).unwrap();

        let mut archive = ZipArchive::new(File::open(&out).unwrap()).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, ["a.txt"]);
    }

    // The input directory is not validated; a missing one is a
    // missing-file warning, so the archive is simply empty.
    #[test]
    fn missing_input_directory_yields_an_empty_archive() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("bundle.zip");
        archive_directory(&dir.path().join("no-such-dir"), &out).unwrap();

        let archive = ZipArchive::new(File::open(&out).unwrap()).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
