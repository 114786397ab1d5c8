//! File Input and Output Staging
//!
//! [`File`] is the input side: a path with a lazily cached size and a
//! buffered reader. The path bytes exactly as the caller typed them are
//! what the IV is derived from, so the path is never canonicalized here.
//!
//! [`Destination`] is the output side. Output is never written in place:
//! [`Destination::stage`] hands out a [`Staged`] writer backed by a temporary
//! file, and only [`Staged::commit`] publishes it, either by renaming it over
//! the target path or by copying it to standard output. Dropping a
//! [`Staged`] without committing discards everything written to it.

use std::fmt;
use std::fs;
use std::io::{self, BufReader, BufWriter, IntoInnerError, Seek, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use tempfile::NamedTempFile;
use tracing::debug;

/// An input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    size: Option<u64>,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), size: None }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The bytes the IV is derived from: the path exactly as supplied.
    #[inline]
    pub fn name_bytes(&self) -> &[u8] {
        self.path.as_os_str().as_encoded_bytes()
    }

    /// File size in bytes, read from metadata once and cached.
    pub fn size(&mut self) -> Result<u64> {
        if let Some(size) = self.size {
            return Ok(size);
        }

        let meta = fs::metadata(&self.path).with_context(|| format!("failed to get metadata: {}", self.path.display()))?;
        self.size = Some(meta.len());

        Ok(meta.len())
    }

    #[inline]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    pub fn reader(&self) -> Result<BufReader<fs::File>> {
        let file = fs::File::open(&self.path).with_context(|| format!("failed to open file: {}", self.path.display()))?;

        Ok(BufReader::new(file))
    }

    /// Checks that the input is an existing regular file and caches its size.
    pub fn validate(&mut self) -> Result<()> {
        ensure!(self.exists(), "file not found: {}", self.path.display());
        ensure!(!self.is_dir(), "path is a directory: {}", self.path.display());
        ensure!(self.path.is_file(), "not a regular file: {}", self.path.display());

        let size = self.size()?;
        debug!(path = %self.path.display(), size, "input validated");

        Ok(())
    }
}

/// Where the output of one pass is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Path(PathBuf),
}

impl Destination {
    pub fn new(output: Option<PathBuf>) -> Self {
        output.map_or(Self::Stdout, Self::Path)
    }

    /// True when publishing here would replace `input`.
    pub fn conflicts_with(&self, input: &File) -> bool {
        let Self::Path(path) = self else {
            return false;
        };

        if path == input.path() {
            return true;
        }

        match (fs::canonicalize(path), fs::canonicalize(input.path())) {
            (Ok(output), Ok(input)) => output == input,
            _ => false,
        }
    }

    /// Opens a temporary file to write the output into.
    ///
    /// For a path destination the temporary file lives in the target's
    /// directory so the final rename stays on one filesystem.
    pub fn stage(&self) -> Result<Staged> {
        let sink = match self {
            Self::Stdout => Sink::Stdout(tempfile::tempfile().context("failed to create temporary file")?),
            Self::Path(path) => {
                let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
                let temp = NamedTempFile::new_in(dir).with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
                Sink::Path { temp, target: path.clone() }
            }
        };

        Ok(Staged { writer: BufWriter::new(sink) })
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

enum Sink {
    Stdout(fs::File),
    Path { temp: NamedTempFile, target: PathBuf },
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(file) => file.write(buf),
            Self::Path { temp, .. } => temp.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(file) => file.flush(),
            Self::Path { temp, .. } => temp.flush(),
        }
    }
}

/// Output written so far, not yet visible at the destination.
pub struct Staged {
    writer: BufWriter<Sink>,
}

impl Staged {
    /// Publishes the staged output.
    pub fn commit(self) -> Result<()> {
        let sink = self.writer.into_inner().map_err(IntoInnerError::into_error).context("failed to flush staged output")?;

        match sink {
            Sink::Stdout(mut file) => {
                file.rewind().context("failed to rewind staged output")?;

                let mut stdout = io::stdout().lock();
                io::copy(&mut file, &mut stdout).context("failed to write to stdout")?;
                stdout.flush().context("failed to flush stdout")?;
            }
            Sink::Path { temp, target } => {
                temp.as_file().sync_all().context("failed to sync staged output")?;
                temp.persist(&target).with_context(|| format!("failed to move output into place: {}", target.display()))?;
                debug!(path = %target.display(), "output published");
            }
        }

        Ok(())
    }
}

impl Write for Staged {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_size_is_cached() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, b"0123456789").unwrap();

        let mut file = File::new(&path);
        assert_eq!(file.size().unwrap(), 10);

        fs::write(&path, b"longer than before").unwrap();
        assert_eq!(file.size().unwrap(), 10);
    }

    #[test]
    fn test_name_bytes_are_path_as_given() {
        let file = File::new("dir/../a.txt");
        assert_eq!(file.name_bytes(), b"dir/../a.txt");
    }

    #[test]
    fn test_validate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        let mut empty = File::new(&path);
        assert!(empty.validate().is_ok());
        assert_eq!(empty.size().unwrap(), 0);

        assert!(File::new(dir.path().join("missing")).validate().is_err());
        assert!(File::new(dir.path()).validate().is_err());
    }

    #[test]
    fn test_commit_publishes() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out.bin");

        let mut staged = Destination::Path(target.clone()).stage().unwrap();
        staged.write_all(b"payload").unwrap();
        assert!(!target.exists());

        staged.commit().unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"payload");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_drop_discards() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out.bin");

        {
            let mut staged = Destination::Path(target.clone()).stage().unwrap();
            staged.write_all(b"never published").unwrap();
        }

        assert!(!target.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_commit_replaces_existing() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out.bin");
        fs::write(&target, b"old").unwrap();

        let mut staged = Destination::Path(target.clone()).stage().unwrap();
        staged.write_all(b"new").unwrap();
        staged.commit().unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn test_conflicts_with() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("same.txt");
        fs::write(&path, b"x").unwrap();
        let input = File::new(&path);

        assert!(Destination::Path(path.clone()).conflicts_with(&input));
        assert!(Destination::Path(dir.path().join(".").join("same.txt")).conflicts_with(&input));
        assert!(!Destination::Path(dir.path().join("other.txt")).conflicts_with(&input));
        assert!(!Destination::Stdout.conflicts_with(&input));
    }

    #[test]
    fn test_destination_display() {
        assert_eq!(Destination::new(None).to_string(), "<stdout>");
        assert_eq!(Destination::new(Some("out.aes".into())).to_string(), "out.aes");
    }
}
