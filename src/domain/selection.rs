use serde::Deserialize;

/// What the single modal slot on the page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    ContactForm,
    Event(usize),
}

/// Query string accepted by the landing page to open a modal directly,
/// e.g. `/?event=1` or `/?modal=contact`. `event` stays raw so a malformed
/// link still renders the page.
#[derive(Debug, Deserialize, Default)]
pub struct SelectionQuery {
    pub event: Option<String>,
    pub modal: Option<String>,
}

impl SelectionQuery {
    /// An event link wins over `modal=contact`; anything unrecognised opens nothing.
    pub fn into_selection(self, catalog_len: usize) -> Selection {
        let event = self.event.map(|raw| raw.trim().parse::<usize>().ok());
        match (event, self.modal.as_deref()) {
            (Some(Some(index)), _) if index < catalog_len => Selection::Event(index),
            (Some(_), _) => Selection::None,
            (None, Some("contact")) => Selection::ContactForm,
            _ => Selection::None,
        }
    }
}

/// Page-owned UI state. Every setter replaces the previous selection, so at
/// most one modal is ever open.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    selection: Selection,
}

impl PageState {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    pub fn select_event(&mut self, index: usize) {
        self.selection = Selection::Event(index);
    }

    pub fn open_contact(&mut self) {
        self.selection = Selection::ContactForm;
    }

    /// Backdrop click or the close button.
    pub fn close(&mut self) {
        self.selection = Selection::None;
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_modal_open(&self) -> bool {
        self.selection != Selection::None
    }
}
