use std::{
    fs, io,
    path::{self, Path, PathBuf},
};

use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Parent,
    Directory,
    CsvFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub name: String,
    pub path: PathBuf,
}

/// Result of a key press in the chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooserOutcome {
    Pending,
    Selected(PathBuf),
    Cancelled,
}

/// Directory browser that only offers `*.csv` files.
#[derive(Debug, Clone)]
pub struct FileChooser {
    dir: PathBuf,
    entries: Vec<Entry>,
    selected: usize,
    error: Option<String>,
}

impl FileChooser {
    /// Lists `dir`, which is made absolute so that `..` always has a target.
    pub fn open(dir: &Path) -> io::Result<Self> {
        let dir = path::absolute(dir)?;
        let entries = read_entries(&dir)?;
        Ok(Self::with_entries(dir, entries))
    }

    fn with_entries(dir: PathBuf, mut entries: Vec<Entry>) -> Self {
        sort_entries(&mut entries);
        // Start on the first file rather than on `..`
        let selected = entries
            .iter()
            .position(|e| e.kind != EntryKind::Parent)
            .unwrap_or(0);
        Self {
            dir,
            entries,
            selected,
            error: None,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.selected)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ChooserOutcome {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return ChooserOutcome::Cancelled,
            KeyCode::Up if !self.entries.is_empty() => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(self.entries.len() - 1);
            }
            KeyCode::Down if !self.entries.is_empty() => {
                self.selected = (self.selected + 1) % self.entries.len();
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.entries.len().saturating_sub(1),
            KeyCode::Backspace | KeyCode::Left => {
                if let Some(parent) = self.dir.parent() {
                    self.change_dir(parent.to_path_buf());
                }
            }
            KeyCode::Enter | KeyCode::Right => return self.activate(),
            _ => {}
        }
        ChooserOutcome::Pending
    }

    fn activate(&mut self) -> ChooserOutcome {
        let Some(entry) = self.entries.get(self.selected) else {
            return ChooserOutcome::Pending;
        };
        match entry.kind {
            EntryKind::CsvFile => ChooserOutcome::Selected(entry.path.clone()),
            EntryKind::Parent | EntryKind::Directory => {
                let dir = entry.path.clone();
                self.change_dir(dir);
                ChooserOutcome::Pending
            }
        }
    }

    fn change_dir(&mut self, dir: PathBuf) {
        match Self::open(&dir) {
            Ok(chooser) => *self = chooser,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot list directory");
                self.error = Some(format!("Cannot open {}: {e}", dir.display()));
            }
        }
    }
}

pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn read_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = vec![];
    if let Some(parent) = dir.parent() {
        entries.push(Entry {
            kind: EntryKind::Parent,
            name: "..".to_owned(),
            path: parent.to_path_buf(),
        });
    }
    for dir_entry in fs::read_dir(dir)?.filter_map(Result::ok) {
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = dir_entry.path();
        let kind = if path.is_dir() {
            EntryKind::Directory
        } else if is_csv(&path) {
            EntryKind::CsvFile
        } else {
            continue;
        };
        entries.push(Entry { kind, name, path });
    }
    Ok(entries)
}

/// Orders entries as `..`, then directories, then files, each group by name.
fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn entry(kind: EntryKind, name: &str) -> Entry {
        Entry {
            kind,
            name: name.to_owned(),
            path: PathBuf::from("/data").join(name),
        }
    }

    fn names(chooser: &FileChooser) -> Vec<&str> {
        chooser.entries().iter().map(|e| e.name.as_str()).collect()
    }

    fn sample_chooser() -> FileChooser {
        FileChooser::with_entries(
            PathBuf::from("/data"),
            vec![
                entry(EntryKind::CsvFile, "b.csv"),
                entry(EntryKind::Directory, "sub"),
                entry(EntryKind::CsvFile, "a.csv"),
                entry(EntryKind::Parent, ".."),
            ],
        )
    }

    #[test]
    fn test_is_csv() {
        assert!(is_csv(Path::new("data.csv")));
        assert!(is_csv(Path::new("DATA.CSV")));
        assert!(!is_csv(Path::new("data.txt")));
        assert!(!is_csv(Path::new("csv")));
    }

    #[test]
    fn test_entries_are_sorted_directories_first() {
        let chooser = sample_chooser();
        assert_eq!(names(&chooser), ["..", "sub", "a.csv", "b.csv"]);
        assert_eq!(chooser.selected(), Some(1));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut chooser = sample_chooser();
        assert_eq!(chooser.handle_key(key(KeyCode::Up)), ChooserOutcome::Pending);
        assert_eq!(chooser.selected(), Some(0));
        chooser.handle_key(key(KeyCode::Up));
        assert_eq!(chooser.selected(), Some(3));
        chooser.handle_key(key(KeyCode::Down));
        assert_eq!(chooser.selected(), Some(0));
        chooser.handle_key(key(KeyCode::End));
        assert_eq!(chooser.selected(), Some(3));
        chooser.handle_key(key(KeyCode::Home));
        assert_eq!(chooser.selected(), Some(0));
    }

    #[test]
    fn test_enter_selects_file() {
        let mut chooser = sample_chooser();
        chooser.handle_key(key(KeyCode::Down));
        assert_eq!(
            chooser.handle_key(key(KeyCode::Enter)),
            ChooserOutcome::Selected(PathBuf::from("/data/a.csv"))
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut chooser = sample_chooser();
        assert_eq!(chooser.handle_key(key(KeyCode::Esc)), ChooserOutcome::Cancelled);
    }

    #[test]
    fn test_empty_chooser_ignores_navigation() {
        let mut chooser = FileChooser::with_entries(PathBuf::from("/"), vec![]);
        assert_eq!(chooser.selected(), None);
        assert_eq!(chooser.handle_key(key(KeyCode::Down)), ChooserOutcome::Pending);
        assert_eq!(chooser.handle_key(key(KeyCode::Enter)), ChooserOutcome::Pending);
    }

    #[test]
    fn test_unreadable_directory_sets_error() {
        let mut chooser = FileChooser::with_entries(
            PathBuf::from("/data"),
            vec![Entry {
                kind: EntryKind::Directory,
                name: "missing".to_owned(),
                path: PathBuf::from("/nonexistent/boxplot/missing"),
            }],
        );
        assert_eq!(chooser.handle_key(key(KeyCode::Enter)), ChooserOutcome::Pending);
        assert_eq!(chooser.dir(), Path::new("/data"));
        assert!(chooser.error().unwrap().starts_with("Cannot open"));
    }

    #[test]
    fn test_open_lists_directory() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        for name in ["values.csv", "UPPER.CSV", "notes.txt"] {
            fs::write(root.join(name), "1\n").unwrap();
        }

        let mut chooser = FileChooser::open(&root).unwrap();
        assert_eq!(names(&chooser), ["..", "nested", "UPPER.CSV", "values.csv"]);

        // Enter "nested", then go back up.
        assert_eq!(chooser.handle_key(key(KeyCode::Enter)), ChooserOutcome::Pending);
        assert_eq!(chooser.dir(), root.join("nested"));
        assert_eq!(names(&chooser), [".."]);
        chooser.handle_key(key(KeyCode::Backspace));
        assert_eq!(chooser.dir(), root);
    }

    #[test]
    fn test_relative_directory_can_go_up() {
        // Tests run from the package root, which contains `src`.
        let mut chooser = FileChooser::open(Path::new("src")).unwrap();
        let package_root = std::env::current_dir().unwrap();
        assert!(chooser.dir().is_absolute());
        assert!(chooser.dir().ends_with("src"));
        assert_eq!(chooser.entries()[0].kind, EntryKind::Parent);
        assert_eq!(chooser.entries()[0].path, chooser.dir().parent().unwrap());

        chooser.handle_key(key(KeyCode::Home));
        assert_eq!(chooser.handle_key(key(KeyCode::Enter)), ChooserOutcome::Pending);
        assert_eq!(chooser.error(), None);
        assert_eq!(chooser.dir(), package_root);

        chooser.handle_key(key(KeyCode::Backspace));
        assert_eq!(chooser.error(), None);
        assert!(chooser.dir().is_absolute());
    }
}
