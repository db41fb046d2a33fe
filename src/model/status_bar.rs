#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    HintShown { label: String, message: String },
    ErrorShown { label: String, message: String },
    Cleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    message: Option<String>,
    is_error: bool,
}

impl StatusBar {
    pub fn message(&self) -> &Option<String> {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    fn set_message(&mut self, label: String, message: String, is_error: bool) {
        let normalized_message = message.replace('\n', " ");
        self.message = Some(format!("[{label}] {normalized_message}"));
        self.is_error = is_error;
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::HintShown { label, message } => self.set_message(label, message, false),
            Message::ErrorShown { label, message } => {
                self.set_message(format!("ERR: {label}"), message, true)
            }
            Message::Cleared => {
                self.message = None;
                self.is_error = false;
            }
        }
    }
}
