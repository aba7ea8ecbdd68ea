use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    Rule(String),
}

impl DomainError {
    /// Every validation message attached to the failed fields, sorted so
    /// callers can assert on them without depending on map order.
    pub fn messages(&self) -> Vec<String> {
        match self {
            DomainError::Validation(errors) => {
                let mut messages: Vec<String> = collect_messages(errors);
                messages.sort();
                messages
            }
            DomainError::Rule(msg) => vec![msg.clone()],
        }
    }
}

fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    use validator::ValidationErrorsKind;

    errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
                .collect::<Vec<_>>(),
            ValidationErrorsKind::Struct(nested) => collect_messages(nested),
            ValidationErrorsKind::List(items) => {
                items.values().flat_map(|e| collect_messages(e)).collect()
            }
        })
        .collect()
}
