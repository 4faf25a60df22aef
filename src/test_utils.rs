#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::form::{FormEvent, FormHost, FormObserver};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    pub fn app_with_input(text: &str) -> App {
        let mut app = test_app();
        app.view.input.textarea.insert_str(text);
        app
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Host that keeps the form's widgets as plain strings
    #[derive(Debug, Default)]
    pub struct MemoryHost {
        pub input: String,
        pub label: String,
        pub error: Option<String>,
    }

    impl MemoryHost {
        pub fn with_input(input: &str) -> Self {
            Self {
                input: input.to_string(),
                ..Self::default()
            }
        }
    }

    impl FormHost for MemoryHost {
        fn input_text(&self) -> String {
            self.input.clone()
        }

        fn set_label_text(&mut self, text: &str) {
            self.label = text.to_string();
        }

        fn set_input_error(&mut self, message: Option<&str>) {
            self.error = message.map(str::to_string);
        }

        fn clear_input_text(&mut self) {
            self.input.clear();
        }
    }

    /// Observer that records every event it sees
    #[derive(Debug, Default)]
    pub struct RecordingObserver {
        pub events: Vec<FormEvent>,
    }

    impl FormObserver for RecordingObserver {
        fn on_event(&mut self, event: &FormEvent) {
            self.events.push(event.clone());
        }
    }
}
