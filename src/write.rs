use crate::footer::Pagination;
use crate::markdown;
use crate::page::Page;
use pulldown_cmark::escape::escape_html;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Opens the document. The `<title>` follows immediately.
const BOILERPLATE: &str = "<!DOCTYPE html><html lang=\"en\"> <head><meta http-equiv=\"content-type\" content=\"text/html; charset=UTF-8\"> <meta charset=\"utf-8\">";

/// The inline stylesheet shared by every page.
const STYLESHEET: &str = r#"<style>
	.pagination {
		text-align: center;
	}

	.pagination a {
		color: black;
		text-decoration: none;
		padding: 8px 15px;
		display: inline-block;
	}

	.pagination a.active {
		background-color: hsl(120, 100%, 70%);
		font-weight: bold;
		border-radius: 5px;
	}

	.pagination a:hover:not(.active) {
		background-color: hsl(0, 0%, 77%);
		border-radius: 5px;
	}

	html * {
		font-family: Arial, sans-serif;
	}

	hr {
		border: solid 1px #ccc;
		margin-bottom: 50px;
		margin-top: 50px;
	}

	body {
		width: 750px;
		margin-left: auto;
		margin-right: auto;
	}

	h1 {
		text-align: right;
		color: #6d4aff;
		margin-bottom: 50px;
	}

	h2 {
		text-align: center;
		color: #372580;
		margin-bottom: 50px;
	}

	p {
		text-align: justify;
	}
	</style>
"#;

/// Responsible for rendering [`Page`]s into styled HTML documents and writing
/// them to disk.
pub struct Writer<'a> {
    /// The blog title, used for both the `<title>` and the `<h1>` heading.
    pub title: &'a str,

    /// The directory in which page `n` is written as `n.html`.
    pub output_directory: &'a Path,
}

impl Writer<'_> {
    /// Renders a single [`Page`] into a complete HTML document. `total` is the
    /// number of pages in the site and drives the pagination footer.
    pub fn render_page(&self, page: &Page, total: usize) -> Result<String> {
        let mut html = String::from(BOILERPLATE);
        html.push_str("<title>");
        escape_html(&mut html, self.title)?;
        html.push_str("</title>");
        html.push_str(STYLESHEET);
        html.push_str("</head><body><h1>");
        escape_html(&mut html, self.title)?;
        html.push_str("</h1>");
        for post in page.posts {
            markdown::to_html(&mut html, &post.source, &post.id);
        }
        html.push_str(
            &Pagination {
                current: page.number,
                total,
            }
            .to_html(),
        );
        html.push_str("</body></html>");
        Ok(html)
    }

    /// Renders and writes a single [`Page`], returning the path of the
    /// written file.
    fn write_page(&self, page: &Page, total: usize) -> Result<PathBuf> {
        let path = self.output_directory.join(page.file_name());
        let html = self.render_page(page, total)?;
        std::fs::write(&path, html).map_err(|err| Error::Io {
            path: path.clone(),
            err,
        })?;
        log::debug!(
            "Wrote `{}` ({} post(s))",
            path.display(),
            page.posts.len()
        );
        Ok(path)
    }

    /// Writes every page in `pages` to disk, each with its footer already in
    /// place, and returns the written paths in page order. The first failure
    /// aborts the remaining pages; files written before it are left behind.
    pub fn write_pages(&self, pages: &[Page]) -> Result<Vec<PathBuf>> {
        pages
            .iter()
            .map(|page| self.write_page(page, pages.len()))
            .collect()
    }
}

/// The result of a fallible page-writing operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// An error writing an output file.
    Io { path: PathBuf, err: io::Error },

    /// An error escaping text into the document.
    Render(io::Error),
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. Only the in-memory
    /// rendering steps go through this conversion; file writes are annotated
    /// with their path instead.
    fn from(err: io::Error) -> Error {
        Error::Render(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io { path, err } => {
                write!(f, "Writing page `{}`: {}", path.display(), err)
            }
            Error::Render(err) => write!(f, "Rendering page: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { path: _, err } => Some(err),
            Error::Render(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::page::paginate;
    use crate::post::Post;

    fn post(id: &str, body: &str) -> Post {
        Post {
            id: id.to_owned(),
            file_name: format!("{}.md", id),
            date: String::from("2024-01-01"),
            source: body.to_owned(),
        }
    }

    #[test]
    fn test_render_page_layout() -> Result<()> {
        let posts = vec![post("a", "## First"), post("b", "## Second")];
        let writer = Writer {
            title: "My Blog",
            output_directory: Path::new("unused"),
        };
        let html = writer.render_page(&Page { number: 1, posts: &posts }, 1)?;

        let positions: Vec<usize> = [
            "<!DOCTYPE html>",
            "<title>My Blog</title>",
            "<style>",
            "</style>",
            "<h1>My Blog</h1>",
            "<h2>First</h2>",
            "<h2>Second</h2>",
            "<div class=\"pagination\">",
            "</body></html>",
        ]
        .iter()
        .map(|needle| html.find(needle).expect(needle))
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, positions);
        assert!(html.ends_with("</div></body></html>"));
        Ok(())
    }

    #[test]
    fn test_render_page_escapes_title() -> Result<()> {
        let writer = Writer {
            title: "Cats & <Dogs>",
            output_directory: Path::new("unused"),
        };
        let html = writer.render_page(&Page { number: 1, posts: &[] }, 1)?;
        assert!(html.contains("<title>Cats &amp; &lt;Dogs&gt;</title>"));
        assert!(html.contains("<h1>Cats &amp; &lt;Dogs&gt;</h1>"));
        Ok(())
    }

    #[test]
    fn test_render_empty_page() -> Result<()> {
        let writer = Writer {
            title: "Empty",
            output_directory: Path::new("unused"),
        };
        let html = writer.render_page(&Page { number: 1, posts: &[] }, 1)?;
        assert!(html.contains(concat!(
            "<h1>Empty</h1>",
            "<div class=\"pagination\">",
            "<a href=\"1.html\">&lt;</a>",
            "<a href=\"1.html\" class=\"active\">1</a>",
            "<a href=\"1.html\">&gt;</a>",
            "</div>",
        )));
        Ok(())
    }

    #[test]
    fn test_write_pages() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let posts: Vec<Post> = (0..5)
            .map(|i| post(&format!("p{}", i), &format!("post number {}", i)))
            .collect();
        let pages = paginate(&posts, 2);
        let writer = Writer {
            title: "Blog",
            output_directory: dir.path(),
        };

        let written = writer.write_pages(&pages)?;
        assert_eq!(
            vec![
                dir.path().join("1.html"),
                dir.path().join("2.html"),
                dir.path().join("3.html"),
            ],
            written
        );

        let third = std::fs::read_to_string(dir.path().join("3.html")).unwrap();
        assert!(third.contains("post number 4"));
        assert!(!third.contains("post number 3"));
        assert!(third.contains("<a href=\"3.html\" class=\"active\">3</a>"));
        Ok(())
    }

    #[test]
    fn test_write_pages_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let writer = Writer {
            title: "Blog",
            output_directory: &missing,
        };
        let pages = paginate(&[], 0);
        match writer.write_pages(&pages) {
            Err(Error::Io { path, .. }) => assert_eq!(missing.join("1.html"), path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
