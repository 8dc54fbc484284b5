//! Single-level directory visitor
//!
//! [`DirectoryVisitor`] reads the immediate entries of one directory and
//! hands each entry's path to the handler registered for its type. It does
//! not recurse.
//!
//! Classification per entry:
//!
//! - **file** / **directory**: decided after following symlinks, so a link
//!   to a file counts as a file;
//! - **symlink**: decided on the entry itself.
//!
//! A symlink therefore reaches two handlers: the one for its target's type
//! and the symlink handler. A broken symlink is only a symlink.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{BoxError, SystemError, SystemResult};

type Handler<'h> = Box<dyn FnMut(&Path) -> Result<(), BoxError> + 'h>;

/// Entries seen in each category during one [`DirectoryVisitor::visit`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitSummary {
    /// Entries read from the directory
    pub entries: usize,
    /// Regular files, symlinks followed
    pub files: usize,
    /// Directories, symlinks followed
    pub dirs: usize,
    /// Symlinks themselves
    pub symlinks: usize,
}

/// Dispatch directory entries to per-type handlers
///
/// # Example
///
/// ```no_run
/// use ferrule_system::DirectoryVisitor;
///
/// let mut sizes = Vec::new();
/// let summary = DirectoryVisitor::new()
///     .on_file(|path| {
///         sizes.push((path.to_path_buf(), std::fs::metadata(path)?.len()));
///         Ok::<_, std::io::Error>(())
///     })
///     .visit("/var/log")?;
///
/// println!("{} files, {} dirs", summary.files, summary.dirs);
/// # Ok::<(), ferrule_system::SystemError>(())
/// ```
#[derive(Default)]
pub struct DirectoryVisitor<'h> {
    on_file: Option<Handler<'h>>,
    on_dir: Option<Handler<'h>>,
    on_symlink: Option<Handler<'h>>,
}

impl fmt::Debug for DirectoryVisitor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryVisitor")
            .field("on_file", &self.on_file.is_some())
            .field("on_dir", &self.on_dir.is_some())
            .field("on_symlink", &self.on_symlink.is_some())
            .finish()
    }
}

fn boxed<'h, F, E>(mut handler: F) -> Handler<'h>
where
    F: FnMut(&Path) -> Result<(), E> + 'h,
    E: Into<BoxError>,
{
    Box::new(move |path| handler(path).map_err(Into::into))
}

impl<'h> DirectoryVisitor<'h> {
    /// Visitor with no handlers
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler for regular files, including symlinks to files
    pub fn on_file<F, E>(mut self, handler: F) -> Self
    where
        F: FnMut(&Path) -> Result<(), E> + 'h,
        E: Into<BoxError>,
    {
        self.on_file = Some(boxed(handler));
        self
    }

    /// Handler for directories, including symlinks to directories
    pub fn on_dir<F, E>(mut self, handler: F) -> Self
    where
        F: FnMut(&Path) -> Result<(), E> + 'h,
        E: Into<BoxError>,
    {
        self.on_dir = Some(boxed(handler));
        self
    }

    /// Handler for symlinks, whatever they point to
    pub fn on_symlink<F, E>(mut self, handler: F) -> Self
    where
        F: FnMut(&Path) -> Result<(), E> + 'h,
        E: Into<BoxError>,
    {
        self.on_symlink = Some(boxed(handler));
        self
    }

    /// Visit the immediate entries of `dir` in directory order.
    ///
    /// For each entry the file, directory and symlink handlers run in that
    /// order, skipping unset ones. The first handler error stops the visit.
    ///
    /// # Errors
    ///
    /// - [`SystemError::NotADirectory`] if `dir` is not a directory
    /// - [`SystemError::Io`] if the directory or an entry cannot be read
    /// - [`SystemError::Handler`] with the first handler failure
    pub fn visit(&mut self, dir: impl AsRef<Path>) -> SystemResult<VisitSummary> {
        let dir = dir.as_ref();
        let metadata = fs::metadata(dir).map_err(|e| SystemError::io(dir, e))?;
        if !metadata.is_dir() {
            return Err(SystemError::NotADirectory(dir.to_path_buf()));
        }

        debug!(dir = %dir.display(), "visiting directory");
        let mut summary = VisitSummary::default();

        for entry in fs::read_dir(dir).map_err(|e| SystemError::io(dir, e))? {
            let entry = entry.map_err(|e| SystemError::io(dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| SystemError::io(&path, e))?;
            summary.entries += 1;

            let is_symlink = file_type.is_symlink();
            let (is_file, is_dir) = if is_symlink {
                // Broken links have no target metadata
                fs::metadata(&path).map_or((false, false), |m| (m.is_file(), m.is_dir()))
            } else {
                (file_type.is_file(), file_type.is_dir())
            };

            if is_file {
                summary.files += 1;
                dispatch(self.on_file.as_mut(), &path, "file")?;
            }
            if is_dir {
                summary.dirs += 1;
                dispatch(self.on_dir.as_mut(), &path, "dir")?;
            }
            if is_symlink {
                summary.symlinks += 1;
                dispatch(self.on_symlink.as_mut(), &path, "symlink")?;
            }
        }

        debug!(
            dir = %dir.display(),
            entries = summary.entries,
            files = summary.files,
            dirs = summary.dirs,
            symlinks = summary.symlinks,
            "directory visited"
        );
        Ok(summary)
    }
}

fn dispatch(handler: Option<&mut Handler<'_>>, path: &Path, kind: &'static str) -> SystemResult<()> {
    let Some(handler) = handler else {
        return Ok(());
    };
    trace!(kind, path = %path.display(), "dispatching entry");
    handler(path).map_err(|source| SystemError::Handler {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let summary = DirectoryVisitor::new().visit(dir.path()).unwrap();
        assert_eq!(summary, VisitSummary::default());
    }

    #[test]
    fn test_visitor_without_handlers_still_counts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let summary = DirectoryVisitor::new().visit(dir.path()).unwrap();
        assert_eq!(
            summary,
            VisitSummary {
                entries: 2,
                files: 1,
                dirs: 1,
                symlinks: 0,
            }
        );
    }

    #[test]
    fn test_debug_shows_registered_handlers() {
        let visitor = DirectoryVisitor::new().on_dir(|_| Ok::<_, std::io::Error>(()));
        assert_eq!(
            format!("{visitor:?}"),
            "DirectoryVisitor { on_file: false, on_dir: true, on_symlink: false }"
        );
    }
}
