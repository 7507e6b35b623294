use std::collections::BTreeMap;

/// Selectors the text effects look up at startup.
pub mod selectors {
    pub const INTERACTIVE_TEXT: &str = ".interactive-text";
    pub const NEXT_BTN: &str = "#nextTextBtn";
    pub const PREV_BTN: &str = "#prevTextBtn";
    pub const NEXT_TEXT: &str = "#nextText";
    pub const HIDDEN_TEXT: &str = ".hidden-text";
    pub const WAVE_TEXT: &str = "#waveText";
}

/// Inline style fragment mutated by the text effects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub transform: Option<String>,
    pub opacity: Option<f64>,
    pub transition: Option<String>,
    pub display: Option<String>,
    pub animation: Option<String>,
    pub animation_delay: Option<String>,
}

/// One host element: text content, inline styles, classes, children.
#[derive(Clone, Debug, Default)]
pub struct Element {
    pub text: String,
    pub style: Style,
    pub classes: Vec<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Minimal headless page: named elements addressed by the selectors the
/// effects expect, plus the letter spans of the interactive text block.
///
/// The host builds this once at startup from whatever real DOM (or scene
/// graph) it drives; the effects only ever mutate inline styles and classes.
#[derive(Clone, Debug, Default)]
pub struct Page {
    elements: BTreeMap<String, Element>,
    letters: Vec<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, selector: &str, element: Element) {
        self.elements.insert(selector.to_owned(), element);
    }

    /// Add one letter span of the interactive text block.
    pub fn push_letter(&mut self, element: Element) {
        self.letters.push(element);
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.elements.contains_key(selector)
    }

    pub fn get(&self, selector: &str) -> Option<&Element> {
        self.elements.get(selector)
    }

    pub fn get_mut(&mut self, selector: &str) -> Option<&mut Element> {
        self.elements.get_mut(selector)
    }

    pub fn letters(&self) -> &[Element] {
        &self.letters
    }

    pub fn letter_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.letters.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_deduplicated() {
        let mut el = Element::with_text("hi");
        el.add_class("show");
        el.add_class("show");
        assert_eq!(el.classes, vec!["show"]);
        el.remove_class("show");
        assert!(!el.has_class("show"));
    }

    #[test]
    fn page_lookup_by_selector() {
        let mut page = Page::new();
        page.insert(selectors::NEXT_BTN, Element::with_text("next"));
        assert!(page.contains(selectors::NEXT_BTN));
        assert!(!page.contains(selectors::PREV_BTN));
        assert_eq!(page.get(selectors::NEXT_BTN).unwrap().text, "next");
    }

    #[test]
    fn letters_are_indexed_in_insertion_order() {
        let mut page = Page::new();
        for ch in ["e", "m", "o"] {
            page.push_letter(Element::with_text(ch));
        }
        assert_eq!(page.letters().len(), 3);
        assert_eq!(page.letter_mut(1).unwrap().text, "m");
        assert!(page.letter_mut(3).is_none());
    }
}
