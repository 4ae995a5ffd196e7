//! Builds the pagination footer which closes every page.

use std::fmt::Write;

use crate::page::file_name;

/// The navigation state of one page among `total` pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// The 1-based number of the page being rendered.
    pub current: usize,

    /// The total number of pages in the site.
    pub total: usize,
}

impl Pagination {
    /// The page the "previous" arrow points at. The first page has no
    /// predecessor and links to itself.
    pub fn prev(&self) -> usize {
        std::cmp::max(1, self.current.saturating_sub(1))
    }

    /// The page the "next" arrow points at. The last page links to itself.
    pub fn next(&self) -> usize {
        if self.current >= self.total {
            self.current
        } else {
            self.current + 1
        }
    }

    /// Renders the footer as a `<div class="pagination">` holding the
    /// previous arrow, one link per page (the current one marked `active`),
    /// and the next arrow.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"pagination\">");
        // Writing into a `String` can't fail.
        let _ = write!(html, "<a href=\"{}\">&lt;</a>", file_name(self.prev()));
        for number in 1..=self.total {
            let _ = if number == self.current {
                write!(
                    html,
                    "<a href=\"{}\" class=\"active\">{}</a>",
                    file_name(number),
                    number
                )
            } else {
                write!(html, "<a href=\"{}\">{}</a>", file_name(number), number)
            };
        }
        let _ = write!(html, "<a href=\"{}\">&gt;</a>", file_name(self.next()));
        html.push_str("</div>");
        html
    }
}
