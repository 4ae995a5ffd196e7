//! Converts post Markdown into HTML fragments using [`pulldown_cmark`].

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Converts `markdown` to HTML, appending the result to `w`.
///
/// Several posts are concatenated onto each page, so footnote labels are
/// rewritten as `{footnote_prefix}-{label}`. Otherwise a `[^1]` in one post
/// would link to the `[^1]` definition of whichever post came first.
pub fn to_html(w: &mut String, markdown: &str, footnote_prefix: &str) {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let event_converter = EventConverter { footnote_prefix };
    html::push_html(
        w,
        Parser::new_ext(markdown, options).map(|ev| event_converter.convert(ev)),
    );
}

struct EventConverter<'a> {
    footnote_prefix: &'a str,
}

impl<'a> EventConverter<'a> {
    fn label<'b>(&self, label: CowStr<'b>) -> CowStr<'b> {
        CowStr::Boxed(
            format!("{}-{}", self.footnote_prefix, label).into_boxed_str(),
        )
    }

    fn convert_tag<'b>(&self, tag: Tag<'b>) -> Tag<'b> {
        match tag {
            Tag::FootnoteDefinition(label) => {
                Tag::FootnoteDefinition(self.label(label))
            }
            _ => tag,
        }
    }

    fn convert<'b>(&self, ev: Event<'b>) -> Event<'b> {
        match ev {
            Event::Start(tag) => Event::Start(self.convert_tag(tag)),
            Event::End(tag) => Event::End(self.convert_tag(tag)),
            Event::FootnoteReference(label) => {
                Event::FootnoteReference(self.label(label))
            }
            _ => ev,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn render(markdown: &str, prefix: &str) -> String {
        let mut html = String::new();
        to_html(&mut html, markdown, prefix);
        html
    }

    #[test]
    fn test_to_html() {
        assert_eq!(
            "<h2>Hello</h2>\n<p>Some <em>text</em>.</p>\n",
            render("## Hello\n\nSome *text*.\n", "post"),
        );
    }

    #[test]
    fn test_to_html_appends() {
        let mut html = String::from("<p>first</p>\n");
        to_html(&mut html, "second", "post");
        assert_eq!("<p>first</p>\n<p>second</p>\n", html);
    }

    #[test]
    fn test_to_html_tables_and_strikethrough() {
        let html = render("| a |\n|---|\n| b |\n\n~~gone~~\n", "post");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_to_html_prefixes_footnotes() {
        let html = render("Claim.[^1]\n\n[^1]: Source.\n", "hello");
        assert!(html.contains("href=\"#hello-1\""), "{}", html);
        assert!(html.contains("id=\"hello-1\""), "{}", html);
        assert!(!html.contains("href=\"#1\""), "{}", html);
    }
}
