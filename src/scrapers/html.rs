use crate::error::ScrapeError;
use scraper::{ElementRef, Html, Selector};

/// An `<a>` element's `title` and `href`, empty strings when missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub title: String,
    pub href: String,
}

impl Anchor {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(css.to_string()))
}

// Adjacent text nodes are joined as-is; only existing whitespace runs collapse
fn collapsed_text(element: ElementRef<'_>) -> String {
    let text = element.text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trimmed, whitespace-collapsed text of every element matching `css`
pub fn select_texts(html: &str, css: &str) -> Result<Vec<String>, ScrapeError> {
    let selector = selector(css)?;
    let document = Html::parse_document(html);

    Ok(document.select(&selector).map(collapsed_text).collect())
}

/// Every anchor whose href contains `needle`, in document order
pub fn select_anchors(html: &str, needle: &str) -> Result<Vec<Anchor>, ScrapeError> {
    let selector = selector("a[href]")?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            if !href.contains(needle) {
                return None;
            }
            let title = a.value().attr("title").unwrap_or_default();
            Some(Anchor::new(title.trim(), href.trim()))
        })
        .collect())
}

/// Text of every block-level `<div>`, with all whitespace removed so that
/// split figures like "IND 186 - 4 (20)" read as "IND186-4(20)"
pub fn block_texts(html: &str) -> Result<Vec<String>, ScrapeError> {
    let selector = selector("div")?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .map(|div| div.text().flat_map(str::split_whitespace).collect::<String>())
        .filter(|text| !text.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_texts_collapses_whitespace() {
        let html = r#"<div class="row">  1IND
            <span>(Q)</span>33006+3.050 </div><div class="row">Group A</div>"#;
        let texts = select_texts(html, ".row").unwrap();
        assert_eq!(texts, vec!["1IND (Q)33006+3.050", "Group A"]);
    }

    #[test]
    fn test_select_texts_keeps_cells_joined() {
        let html = r#"<div class="row"><span>1</span><span>IND</span> <span>3</span><span>2</span></div>"#;
        let texts = select_texts(html, ".row").unwrap();
        assert_eq!(texts, vec!["1IND 32"]);
    }

    #[test]
    fn test_select_anchors_filters_by_href() {
        let html = r#"
            <a href="/live-cricket-scores/1/x" title="India vs Australia, 1st Match - Live">a</a>
            <a href="/cricket-news/2">b</a>
            <a href="/live-cricket-scores/3/y">c</a>
        "#;
        let anchors = select_anchors(html, "/live-cricket-scores/").unwrap();
        assert_eq!(
            anchors,
            vec![
                Anchor::new(
                    "India vs Australia, 1st Match - Live",
                    "/live-cricket-scores/1/x"
                ),
                Anchor::new("", "/live-cricket-scores/3/y"),
            ]
        );
    }

    #[test]
    fn test_block_texts_strip_whitespace() {
        let html = "<div>IND 186 - 4 (20)</div><div>   </div>";
        assert_eq!(block_texts(html).unwrap(), vec!["IND186-4(20)"]);
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(matches!(
            select_texts("<p></p>", "[[["),
            Err(ScrapeError::Selector(_))
        ));
    }
}
