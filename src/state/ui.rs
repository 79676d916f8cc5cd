// UI state - presentation settings and transient messages
use std::time::Instant;

pub struct UIState {
    pub info_message: Option<(String, Instant)>,
    /// Text in the path field. Follows the active panel unless the user is editing it.
    pub path_input: String,
    pub path_input_dirty: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            info_message: None,
            path_input: String::new(),
            path_input_dirty: false,
        }
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_message_survives() {
        let mut ui = UIState::new();
        ui.set_info("Created file: a.txt".into());
        ui.clear_expired_messages(5);
        assert!(ui.info_message.is_some());
        ui.clear_expired_messages(0);
        assert!(ui.info_message.is_none());
    }
}
