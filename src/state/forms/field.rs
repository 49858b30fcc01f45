//! Form field value objects

/// Mask character used for hidden secrets
pub const MASK_CHAR: char = '•';

/// Represents a single text input with its label and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    /// Whether the value is rendered masked unless revealed
    pub is_secret: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            is_secret: false,
        }
    }

    /// Create a new secret field (masked when rendered)
    pub fn secret(label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the display value for rendering
    pub fn display_value(&self, reveal: bool) -> String {
        if self.is_secret && !reveal {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("Email");
        field.push_char('a');
        field.push_char('b');
        assert_eq!(field.as_text(), "ab");
        field.pop_char();
        assert_eq!(field.as_text(), "a");
        field.pop_char();
        field.pop_char();
        assert!(field.is_empty());
    }

    #[test]
    fn test_secret_is_masked_per_char() {
        let mut field = FormField::secret("Password");
        field.set_text("pässword".to_string());
        assert_eq!(field.display_value(false), "••••••••");
        assert_eq!(field.display_value(true), "pässword");
    }

    #[test]
    fn test_plain_field_ignores_reveal() {
        let mut field = FormField::text("Email");
        field.set_text("a@b.com".to_string());
        assert_eq!(field.display_value(false), "a@b.com");
    }
}
