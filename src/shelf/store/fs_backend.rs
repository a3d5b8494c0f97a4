use super::backend::{Slot, StorageBackend};
use crate::error::{Result, ShelfError};
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    books_file: PathBuf,
    free_ids_file: PathBuf,
}

impl FsBackend {
    pub fn new(books_file: PathBuf, free_ids_file: PathBuf) -> Self {
        Self {
            books_file,
            free_ids_file,
        }
    }

    fn path(&self, slot: Slot) -> &Path {
        match slot {
            Slot::Books => &self.books_file,
            Slot::FreeIds => &self.free_ids_file,
        }
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

/// Owner-only read/write. Best effort: platforms without unix permission
/// bits are left alone, and failures only warn.
fn restrict_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
            warn!("Could not restrict permissions on {}: {}", path.display(), e);
        }
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
}

impl StorageBackend for FsBackend {
    fn ensure(&self, slot: Slot) -> Result<()> {
        let path = self.path(slot);
        self.ensure_parent(path)?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(ShelfError::Io)?;
        restrict_permissions(path);
        Ok(())
    }

    fn open(&self, slot: Slot) -> Result<Box<dyn BufRead + '_>> {
        match File::open(self.path(slot)) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Box::new(io::empty())),
            Err(e) => Err(ShelfError::Io(e)),
        }
    }

    fn replace(&self, slot: Slot, content: &str) -> Result<()> {
        let target = self.path(slot);
        self.ensure_parent(target)?;

        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let name = target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("shelf");

        // Atomic write
        let tmp = dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp, content).map_err(ShelfError::Io)?;
        restrict_permissions(&tmp);
        if let Err(e) = fs::rename(&tmp, target) {
            let _ = fs::remove_file(&tmp);
            return Err(ShelfError::Io(e));
        }

        debug!("Rewrote {} ({} bytes)", target.display(), content.len());
        Ok(())
    }

    fn append_line(&self, slot: Slot, line: &str) -> Result<()> {
        let path = self.path(slot);
        self.ensure_parent(path)?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)
            .map_err(ShelfError::Io)?;

        let mut text = String::with_capacity(line.len() + 2);
        if file.metadata().map_err(ShelfError::Io)?.len() > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1)).map_err(ShelfError::Io)?;
            file.read_exact(&mut last).map_err(ShelfError::Io)?;
            if last[0] != b'\n' {
                text.push('\n');
            }
        }
        text.push_str(line);
        if !line.ends_with('\n') {
            text.push('\n');
        }

        file.write_all(text.as_bytes()).map_err(ShelfError::Io)?;
        Ok(())
    }
}
