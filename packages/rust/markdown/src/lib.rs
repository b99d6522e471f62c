//! HTML-to-Markdown extraction for downloaded newsletter posts.
//!
//! Turns one noisy HTML document into Markdown suitable for downstream
//! summarization. The pipeline:
//! 1. Prunes structural noise (scripts, styles, navigation, ad containers)
//!    from the parsed DOM
//! 2. Scores the pruned document with the readability heuristic to isolate
//!    the main content region
//! 3. Converts that region to Markdown via `htmd`
//!
//! Whitespace canonicalization lives in [`cleanup`] and the advisory
//! quality checks in [`validate`].

mod cleanup;
mod validate;

use std::sync::LazyLock;

use scraper::Html;
use tracing::{debug, instrument};
use url::Url;

use postpress_shared::{PostpressError, Result};

pub use cleanup::normalize;
pub use validate::{ValidationReport, validate};

/// Tags whose entire subtree is structural noise in a newsletter page.
const NOISE_TAGS: &[&str] = &["script", "style", "nav", "footer", "aside"];

/// Class names marking ad or tracking containers.
const NOISE_CLASSES: &[&str] = &["ad", "advertisement", "tracking"];

/// Base URL handed to the readability scorer. Inputs are local files, so
/// there is nothing meaningful to resolve relative links against.
static LOCAL_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://localhost/").expect("valid URL"));

/// Extract the main content of one HTML document as Markdown.
///
/// Returns `Ok(None)` when the document has no identifiable main content;
/// that is a skip, not an error. The output never contains pruned noise,
/// but residual inline markup the readability heuristic did not recognize
/// may survive; the [`validate`] checks flag (without blocking) such cases.
#[instrument(skip(html), fields(input_len = html.len()))]
pub fn extract(html: &str) -> Result<Option<String>> {
    let pruned = prune_noise(html);

    let article = match readability::extractor::extract(&mut pruned.as_bytes(), &LOCAL_BASE) {
        Ok(article) => article,
        Err(e) => {
            debug!(error = %e, "readability found no content");
            return Ok(None);
        }
    };

    if article.content.trim().is_empty() {
        return Ok(None);
    }

    let converter = htmd::HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style", "iframe", "noscript", "svg"])
        .build();

    let markdown = converter
        .convert(&article.content)
        .map_err(|e| PostpressError::Conversion(format!("htmd conversion failed: {e}")))?;

    if markdown.trim().is_empty() {
        return Ok(None);
    }

    debug!(markdown_len = markdown.len(), "extraction complete");
    Ok(Some(markdown))
}

/// Remove noise subtrees from the document and re-serialize it.
///
/// Drops every `script`/`style`/`nav`/`footer`/`aside` element and every
/// element carrying an `ad`, `advertisement`, or `tracking` class, each
/// including its descendants. Siblings are left untouched.
fn prune_noise(html: &str) -> String {
    let mut doc = Html::parse_document(html);

    let doomed: Vec<_> = doc
        .tree
        .nodes()
        .filter(|node| {
            node.value().as_element().is_some_and(|el| {
                NOISE_TAGS.contains(&el.name())
                    || el.classes().any(|class| NOISE_CLASSES.contains(&class))
            })
        })
        .map(|node| node.id())
        .collect();

    for id in doomed {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }

    doc.root_element().html()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_BODY: &str = "<article>\
        <h1>Why Compilers Hoard Registers</h1>\
        <p>Register allocation is the quiet workhorse of every optimizing \
        compiler, and understanding why spill decisions ripple through an \
        entire function body takes more than a glance at the emitted \
        assembly listing.</p>\
        <p>In this issue we walk through graph coloring from first \
        principles, look at how linear scan trades allocation quality for \
        compile speed, and examine the heuristics production backends use \
        when the interference graph refuses to cooperate.</p>\
        <p>Finally, we benchmark three real workloads to see how much a \
        single forced spill inside a hot loop actually costs, and why the \
        answer surprised the team that reported the regression in the \
        first place.</p>\
        </article>";

    fn page(extra: &str) -> String {
        format!("<html><head><title>Issue 42</title></head><body>{extra}{ARTICLE_BODY}</body></html>")
    }

    #[test]
    fn prune_drops_script_and_style_content() {
        let html = page("<script>alert('tracked');</script><style>body{color:red}</style>");
        let pruned = prune_noise(&html);
        assert!(!pruned.contains("alert"));
        assert!(!pruned.contains("color:red"));
        assert!(pruned.contains("Register allocation"));
    }

    #[test]
    fn prune_drops_boilerplate_regions_with_descendants() {
        let html = page(
            "<nav><ul><li><a href=\"/archive\">Archive</a></li></ul></nav>\
             <aside><p>Sponsored reading list</p></aside>\
             <footer><p>Unsubscribe at any time</p></footer>",
        );
        let pruned = prune_noise(&html);
        assert!(!pruned.contains("Archive"));
        assert!(!pruned.contains("Sponsored reading list"));
        assert!(!pruned.contains("Unsubscribe"));
    }

    #[test]
    fn prune_drops_ad_classed_elements() {
        let html = page(
            "<div class=\"ad\">Buy the course</div>\
             <div class=\"sidebar advertisement\">Banner here</div>\
             <div class=\"tracking\"><img src=\"pixel.gif\"></div>",
        );
        let pruned = prune_noise(&html);
        assert!(!pruned.contains("Buy the course"));
        assert!(!pruned.contains("Banner here"));
        assert!(!pruned.contains("pixel.gif"));
    }

    #[test]
    fn prune_keeps_unrelated_classes() {
        let html = page("<div class=\"adjacent\">Kept paragraph</div>");
        let pruned = prune_noise(&html);
        assert!(pruned.contains("Kept paragraph"));
    }

    #[test]
    fn extract_returns_markdown_without_noise() {
        let html = page("<script>alert('tracked');</script><nav><a href=\"/\">Home</a></nav>");
        let markdown = extract(&html).unwrap().expect("content present");

        assert!(markdown.contains("Register allocation"));
        assert!(markdown.contains("graph coloring"));
        assert!(!markdown.contains("alert"));
        assert!(!markdown.contains("<script"));
    }

    #[test]
    fn extract_empty_body_yields_none() {
        let result = extract("<html><head><title>x</title></head><body></body></html>").unwrap();
        assert!(result.is_none());
    }
}
