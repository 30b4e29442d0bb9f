// src/source.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::table::Table;

/// Hands raw dataset text to the parser. The parser and estimator never touch
/// the filesystem themselves, so callers can inject whatever resolution
/// strategy they want.
pub trait DataSource {
    fn read(&self, name: &str) -> io::Result<String>;
}

/// Resolves dataset names against a data directory. A name that is already a
/// path to an existing file is read directly; otherwise `<dir>/<name>.csv`.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirSource { dir: dir.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        let direct = Path::new(name);
        if direct.is_file() {
            direct.to_path_buf()
        } else {
            self.dir.join(format!("{name}.csv"))
        }
    }
}

impl DataSource for DirSource {
    fn read(&self, name: &str) -> io::Result<String> {
        let path = self.resolve(name);
        debug!(path = %path.display(), "reading dataset");
        fs::read_to_string(path)
    }
}

/// Open a named dataset, degrading to an empty table when the source cannot
/// be read. The viewer renders the empty table instead of failing.
pub fn open_table(source: &dyn DataSource, name: &str) -> Table {
    match source.read(name) {
        Ok(text) => Table::parse(&text),
        Err(e) => {
            warn!(dataset = name, error = %e, "dataset unreadable, showing empty table");
            Table::default()
        }
    }
}
