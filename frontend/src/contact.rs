use thiserror::Error;

pub const SERVICE_OPTIONS: [&str; 5] = [
    "Social Media Management",
    "Ads Campaign Management",
    "Website Development",
    "App Development",
    "Not sure yet",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please tell us a little about what you need.")]
    MissingMessage,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub business: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if self.message.trim().is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        Ok(())
    }

    /// Text handed to WhatsApp. Only produced for a valid form.
    pub fn to_whatsapp_message(&self) -> Result<String, ContactFormError> {
        self.validate()?;

        let mut text = format!("Hi Shyara Marketing, I'm {}", self.name.trim());
        let business = self.business.trim();
        if !business.is_empty() {
            text.push_str(&format!(" from {}", business));
        }
        text.push('.');
        let service = self.service.trim();
        if !service.is_empty() {
            text.push_str(&format!(" I'm interested in {}.", service));
        }
        text.push_str(&format!("\n\n{}", self.message.trim()));
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha".to_string(),
            business: "Asha Bakes".to_string(),
            service: "Website Development".to_string(),
            message: "Need an online menu.".to_string(),
        }
    }

    #[test]
    fn name_and_message_are_required() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::MissingName));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.to_whatsapp_message(), Err(ContactFormError::MissingMessage));
    }

    #[test]
    fn message_includes_optional_parts_when_present() {
        let text = filled().to_whatsapp_message().unwrap();
        assert_eq!(
            text,
            "Hi Shyara Marketing, I'm Asha from Asha Bakes. I'm interested in Website Development.\n\nNeed an online menu."
        );

        let minimal = ContactForm {
            name: "Ravi".to_string(),
            message: "Call me".to_string(),
            ..ContactForm::default()
        };
        assert_eq!(minimal.to_whatsapp_message().unwrap(), "Hi Shyara Marketing, I'm Ravi.\n\nCall me");
    }
}
