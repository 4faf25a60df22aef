use ratatui::layout::Rect;

/// Clickable parts of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    SuggestButton,
    ResetButton,
    SuggestionLabel,
}

/// Screen areas from the last render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub suggest_button: Option<Rect>,
    pub reset_button: Option<Rect>,
    pub suggestion_label: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Regions in hit-test priority order
    pub(super) fn entries(&self) -> [(Option<Rect>, Region); 4] {
        [
            (self.suggest_button, Region::SuggestButton),
            (self.reset_button, Region::ResetButton),
            (self.input_field, Region::InputField),
            (self.suggestion_label, Region::SuggestionLabel),
        ]
    }
}
