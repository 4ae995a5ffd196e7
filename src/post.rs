//! Defines the [`Post`] type along with the logic for collecting posts from
//! the input directory. Every post must carry a publish-date marker line of
//! the form `*Published on 2024-01-01.*`; see [`extract_date`] for the exact
//! rules. Files without a usable marker are logged and skipped rather than
//! failing the whole run.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::WalkDir;

/// The literal text which identifies the publish-date marker line.
pub const DATE_MARKER: &str = "*Published on ";

const MARKDOWN_EXTENSION: &str = "md";

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*Published on (\d{4}-\d{2}-\d{2})\.").unwrap()
});

/// A single Markdown source file along with its publish date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    /// The file stem (e.g., `hello` for `hello.md`). Used to namespace
    /// footnote anchors when several posts share a page.
    pub id: String,

    /// The file name relative to the input directory.
    pub file_name: String,

    /// The publish date as `YYYY-MM-DD`. Lexical order on this field is date
    /// order.
    pub date: String,

    /// The raw Markdown contents of the file.
    pub source: String,
}

/// Finds the publish date in `markdown`. The first line containing
/// [`DATE_MARKER`] is the marker line; it must continue with a
/// period-terminated `YYYY-MM-DD` date, e.g.:
///
/// ```md
/// *Published on 2024-03-01. Filed under misc.*
/// ```
///
/// Later marker lines are never consulted, even if the first one is
/// malformed.
pub fn extract_date(markdown: &str) -> std::result::Result<String, DateError> {
    let line = markdown
        .lines()
        .find(|line| line.contains(DATE_MARKER))
        .ok_or(DateError::NotFound)?;

    let date = DATE_PATTERN
        .captures(line)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| DateError::Malformed(line.to_owned()))?
        .as_str();

    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|err| {
        DateError::InvalidDate {
            date: date.to_owned(),
            err,
        }
    })?;
    Ok(date.to_owned())
}

/// Collects every `.md` file directly inside `source_directory` (the
/// extension match is case-sensitive and subdirectories are not searched).
/// Files are visited in file-name order. Posts without a publish date are
/// logged and left out of the result; the returned posts are not yet sorted
/// by date (see [`crate::page::sort_posts`]).
pub fn parse_posts(source_directory: &Path) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    for result in WalkDir::new(source_directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = result?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str())
                != Some(MARKDOWN_EXTENSION)
        {
            continue;
        }

        let source = std::fs::read_to_string(path).map_err(|err| Error::Io {
            path: path.to_owned(),
            err,
        })?;
        let file_name = entry.file_name().to_string_lossy().into_owned();

        match extract_date(&source) {
            Ok(date) => posts.push(Post {
                id: path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                file_name,
                date,
                source,
            }),
            Err(err) => {
                log::warn!("Skipping `{}`: {}", path.display(), err);
            }
        }
    }

    log::debug!(
        "Collected {} dated post(s) from `{}`",
        posts.len(),
        source_directory.display()
    );
    Ok(posts)
}

/// Represents a failure to find a publish date in a post. These are never
/// fatal: the collector skips the offending file.
#[derive(Debug)]
pub enum DateError {
    /// No line contains the publish-date marker.
    NotFound,

    /// The marker line isn't followed by a period-terminated `YYYY-MM-DD`
    /// date.
    Malformed(String),

    /// The date has the right shape but isn't a real calendar date.
    InvalidDate {
        date: String,
        err: chrono::ParseError,
    },
}

impl fmt::Display for DateError {
    /// Displays a [`DateError`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DateError::NotFound => {
                write!(f, "no line containing `{}` found", DATE_MARKER.trim())
            }
            DateError::Malformed(line) => write!(
                f,
                "expected `{}YYYY-MM-DD.` but found `{}`",
                DATE_MARKER,
                line.trim()
            ),
            DateError::InvalidDate { date, err } => {
                write!(f, "invalid publish date `{}`: {}", date, err)
            }
        }
    }
}

impl std::error::Error for DateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DateError::NotFound => None,
            DateError::Malformed(_) => None,
            DateError::InvalidDate { date: _, err } => Some(err),
        }
    }
}

/// Represents the result of collecting posts.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error collecting [`Post`]s from the input directory.
#[derive(Debug)]
pub enum Error {
    /// Returned when a post file can't be read (including when it isn't
    /// valid UTF-8).
    Io { path: PathBuf, err: std::io::Error },

    /// Returned when the input directory can't be listed.
    WalkDir(walkdir::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io { path, err } => {
                write!(f, "Reading post `{}`: {}", path.display(), err)
            }
            Error::WalkDir(err) => write!(f, "Listing posts: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { path: _, err } => Some(err),
            Error::WalkDir(err) => Some(err),
        }
    }
}

impl From<walkdir::Error> for Error {
    /// Converts a [`walkdir::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator while listing the input directory.
    fn from(err: walkdir::Error) -> Error {
        Error::WalkDir(err)
    }
}
