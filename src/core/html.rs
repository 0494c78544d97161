use crate::utils::error::{LookupError, Result};
use scraper::{ElementRef, Selector};

/// Typed queries over a parsed document.
pub trait TreeQuery<'a> {
    /// First descendant matching `selector`, in document order.
    fn first(&self, selector: &Selector) -> Option<ElementRef<'a>>;

    /// All descendants matching `selector`, in document order.
    fn all(&self, selector: &Selector) -> Vec<ElementRef<'a>>;

    /// Concatenated descendant text, trimmed.
    fn text_content(&self) -> String;
}

impl<'a> TreeQuery<'a> for ElementRef<'a> {
    fn first(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }

    fn all(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }

    fn text_content(&self) -> String {
        self.text().collect::<String>().trim().to_string()
    }
}

pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| LookupError::InvalidSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_first_and_all_keep_document_order() {
        let doc = Html::parse_fragment("<ul><li>a</li><li> b </li><li>c</li></ul>");
        let root = doc.root_element();
        let li = parse_selector("li").unwrap();

        assert_eq!(root.first(&li).unwrap().text_content(), "a");
        let texts: Vec<String> = root.all(&li).iter().map(|e| e.text_content()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_match_is_none() {
        let doc = Html::parse_fragment("<div><p>x</p></div>");
        let span = parse_selector("span").unwrap();
        assert!(doc.root_element().first(&span).is_none());
        assert!(doc.root_element().all(&span).is_empty());
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let err = parse_selector("p:::").unwrap_err();
        assert!(matches!(err, LookupError::InvalidSelector { .. }));
    }
}
