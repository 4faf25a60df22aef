/// Buttons the host exposes on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Suggest,
    Reset,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Suggest => "Suggest",
            Button::Reset => "Reset",
        }
    }
}

/// UI collaborator the form controller reads from and writes to
pub trait FormHost {
    /// Current text of the input field
    fn input_text(&self) -> String;

    fn set_label_text(&mut self, text: &str);

    /// Set or clear (`None`) the error annotation on the input field
    fn set_input_error(&mut self, message: Option<&str>);

    fn clear_input_text(&mut self);
}
