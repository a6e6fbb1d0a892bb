use std::fmt;
use std::path::{Path, PathBuf};

/// Marker used on the command line for standard input or output
pub const STDIO_MARKER: &str = "-";

/// Where a corpus is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// A file on disk
    Path(PathBuf),
    /// The process' standard input (can be consumed once)
    Stdin,
}

impl CorpusSource {
    /// Resolve a command-line argument, mapping `-` to standard input
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == STDIO_MARKER {
            CorpusSource::Stdin
        } else {
            CorpusSource::Path(arg.to_path_buf())
        }
    }

    /// Name used to identify the corpus in reports
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusSource::Path(path) => write!(f, "{}", path.display()),
            CorpusSource::Stdin => write!(f, "<stdin>"),
        }
    }
}
