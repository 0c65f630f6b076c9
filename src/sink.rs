use yew::Callback;

/// Destination for the formatted time. Must not block.
pub trait DisplaySink {
    fn show(&self, text: &str);
}

impl<F: Fn(&str)> DisplaySink for F {
    fn show(&self, text: &str) {
        self(text)
    }
}

/// Writes into the text content of a page element.
pub struct ElementSink {
    element: web_sys::Element,
}

impl ElementSink {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }

    /// Looks the element up in the current document.
    pub fn by_id(id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        document.get_element_by_id(id).map(Self::new)
    }
}

impl DisplaySink for ElementSink {
    fn show(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// Forwards each refresh to a yew callback (e.g. a `use_state` setter).
pub struct CallbackSink(pub Callback<String>);

impl DisplaySink for CallbackSink {
    fn show(&self, text: &str) {
        self.0.emit(text.to_string());
    }
}
