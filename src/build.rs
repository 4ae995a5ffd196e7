//! Exports the [`build_site`] function which stitches together the high-level
//! steps of building the blog: collecting dated posts ([`crate::post`]),
//! ordering and paginating them ([`crate::page`]), and rendering every page
//! with its pagination footer ([`crate::write`]).

use crate::config::Config;
use crate::page::{paginate, sort_posts};
use crate::post::{parse_posts, Error as ParseError};
use crate::write::{Error as WriteError, Writer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Builds the blog from a [`Config`] object and returns the paths of the
/// written pages in page order.
///
/// The output directory must be empty (it is created if it doesn't exist);
/// the build refuses to run otherwise so that nothing is ever overwritten.
/// There is no cleanup on failure: pages written before an error stay on
/// disk.
pub fn build_site(config: &Config) -> Result<Vec<PathBuf>> {
    let mut posts = parse_posts(&config.input_directory)?;
    sort_posts(&mut posts);

    ensure_empty(&config.output_directory)?;

    let pages = paginate(&posts, config.posts_per_page);
    let writer = Writer {
        title: &config.title,
        output_directory: &config.output_directory,
    };
    let written = writer.write_pages(&pages)?;

    log::info!(
        "Wrote {} post(s) across {} page(s) to `{}`",
        posts.len(),
        written.len(),
        config.output_directory.display()
    );
    Ok(written)
}

/// Checks that `dir` is empty, creating it if it doesn't exist yet.
fn ensure_empty(dir: &Path) -> Result<()> {
    let io_err = |err| Error::Io {
        path: dir.to_owned(),
        err,
    };
    match std::fs::read_dir(dir) {
        Ok(mut entries) => match entries.next() {
            None => Ok(()),
            Some(_) => Err(Error::OutputNotEmpty(dir.to_owned())),
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("Creating output directory `{}`", dir.display());
            std::fs::create_dir_all(dir).map_err(io_err)
        }
        Err(e) => Err(io_err(e)),
    }
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building the blog. Errors can be during collecting,
/// writing, or checking the output directory.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors collecting posts.
    Parse(ParseError),

    /// Returned for errors writing pages to disk.
    Write(WriteError),

    /// Returned when the output directory already has contents.
    OutputNotEmpty(PathBuf),

    /// Returned for I/O problems while checking or creating the output
    /// directory.
    Io { path: PathBuf, err: std::io::Error },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => err.fmt(f),
            Error::Write(err) => err.fmt(f),
            Error::OutputNotEmpty(path) => write!(
                f,
                "The output folder `{}` is not empty. Please provide an empty folder",
                path.display()
            ),
            Error::Io { path, err } => {
                write!(f, "Preparing output folder `{}`: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Write(err) => Some(err),
            Error::OutputNotEmpty(_) => None,
            Error::Io { path: _, err } => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    /// Converts [`ParseError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: ParseError) -> Error {
        Error::Parse(err)
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}
