//! Orders posts by date and groups them into [`Page`]s.

use crate::post::Post;

/// A contiguous group of posts which is rendered into a single output file.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a> {
    /// The 1-based page number. Page `n` is written to `n.html`.
    pub number: usize,

    /// The posts on the page, oldest first.
    pub posts: &'a [Post],
}

impl Page<'_> {
    /// The output file name for the page (e.g., `3.html`).
    pub fn file_name(&self) -> String {
        file_name(self.number)
    }
}

/// The output file name for page `number`.
pub fn file_name(number: usize) -> String {
    format!("{}.html", number)
}

/// Sorts posts oldest first by comparing their date strings lexically. The
/// sort is stable, so posts which share a date keep their collection order.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| a.date.cmp(&b.date));
}

/// Partitions `posts` into pages of `page_size` posts each. The final page
/// holds whatever is left over. A `page_size` of zero puts every post on a
/// single page. An empty `posts` slice still yields one (empty) page so that
/// every run produces at least `1.html`.
pub fn paginate(posts: &[Post], page_size: usize) -> Vec<Page<'_>> {
    if posts.is_empty() || page_size == 0 {
        return vec![Page { number: 1, posts }];
    }

    posts
        .chunks(page_size)
        .enumerate()
        .map(|(i, chunk)| Page {
            number: i + 1,
            posts: chunk,
        })
        .collect()
}
