//! Size-rotated log file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Log file that rolls over to numbered backups once it grows past a limit
///
/// `app.log` is the live file; `app.log.1` is the newest backup and
/// `app.log.{max_backups}` the oldest. Older backups are deleted.
#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    max_backups: usize,
}

impl RollingFile {
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            file,
            written,
            max_bytes,
            max_backups,
        })
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_backups == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))?;

        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn test_appends_below_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let mut file = RollingFile::open(&path, 1024, 2).unwrap();
        file.write_all(b"one\n").unwrap();
        file.write_all(b"two\n").unwrap();
        assert_eq!(read(&path), "one\ntwo\n");
    }

    #[test]
    fn test_rotates_and_bounds_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let mut file = RollingFile::open(&path, 8, 2).unwrap();
        for line in ["aaaaaa\n", "bbbbbb\n", "cccccc\n", "dddddd\n"] {
            file.write_all(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert_eq!(read(&path), "dddddd\n");
        assert_eq!(read(&dir.path().join("app.log.1")), "cccccc\n");
        assert_eq!(read(&dir.path().join("app.log.2")), "bbbbbb\n");
        assert!(!dir.path().join("app.log.3").exists());
    }

    #[test]
    fn test_reopen_continues_size_accounting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        RollingFile::open(&path, 8, 1).unwrap().write_all(b"abcdef\n").unwrap();

        let mut file = RollingFile::open(&path, 8, 1).unwrap();
        file.write_all(b"ghijkl\n").unwrap();
        assert_eq!(read(&path), "ghijkl\n");
        assert_eq!(read(&dir.path().join("app.log.1")), "abcdef\n");
    }

    #[test]
    fn test_zero_backups_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let mut file = RollingFile::open(&path, 4, 0).unwrap();
        file.write_all(b"abc\n").unwrap();
        file.write_all(b"def\n").unwrap();
        assert_eq!(read(&path), "def\n");
        assert!(!dir.path().join("app.log.1").exists());
    }
}
