use crate::models::errors::SubmissionError;

/// Operator input collected alongside the uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub name: String,
    pub approver: String
}

impl BatchRequest {
    pub fn new(name: impl Into<String>, approver: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            approver: approver.into()
        }
    }

    /// Checks the request before a batch is aggregated for it.
    ///
    /// # Errors
    /// Returns `SubmissionError` if the name or approver is blank, or the approver
    /// is not one of `approvers`.
    pub fn validate(&self, approvers: &[String]) -> Result<(), SubmissionError> {
        if self.name.trim().is_empty() {
            return Err(SubmissionError::NameRequired);
        }

        if self.approver.trim().is_empty() {
            return Err(SubmissionError::ApproverRequired);
        }

        if !approvers.iter().any(|approver| *approver == self.approver) {
            return Err(SubmissionError::UnknownApprover { approver: self.approver.clone() });
        }

        Ok(())
    }
}
