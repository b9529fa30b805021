use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.first_name.trim().is_empty() {
            return Err(DomainError::BlankContactField("first name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(DomainError::BlankContactField("last name"));
        }
        if self.message.trim().is_empty() {
            return Err(DomainError::BlankContactField("message"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(DomainError::BlankContactField("email"));
        }
        let Some((local, host)) = email.split_once('@') else {
            return Err(DomainError::InvalidContactEmail(self.email.clone()));
        };
        if local.is_empty() || host.is_empty() {
            return Err(DomainError::InvalidContactEmail(self.email.clone()));
        }

        Ok(())
    }
}
