//! Inline style declaration block.
//!
//! [CSSOM § 6.6 CSSStyleDeclaration](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)

/// "A CSS declaration block is an ordered collection of CSS properties with
/// their associated values."
///
/// Property names are stored lowercased; values are kept as authored
/// (trimmed). Order of first insertion is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    declarations: Vec<(String, String)>,
}

impl StyleDeclarations {
    /// Parse a `style` attribute value such as `"display: none; margin-left: 4px"`.
    ///
    /// Declarations without a colon or with an empty name are skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut style = Self::default();
        for declaration in text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            style.set_property(name, value);
        }
        style
    }

    /// [`getPropertyValue()`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue)
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// [`setProperty()`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty)
    ///
    /// "If value is the empty string, invoke removeProperty() with property
    /// as argument and return."
    pub fn set_property(&mut self, name: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.remove_property(name);
            return;
        }
        if let Some(slot) = self
            .declarations
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            value.clone_into(&mut slot.1);
        } else {
            self.declarations
                .push((name.to_ascii_lowercase(), value.to_string()));
        }
    }

    /// [`removeProperty()`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-removeproperty)
    pub fn remove_property(&mut self, name: &str) {
        self.declarations.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
    }

    /// Number of declarations in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the block has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// [`cssText`](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext)
    /// serialization, e.g. `"display: none; margin-top: 4px;"`.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
