pub type DriftglowResult<T> = Result<T, DriftglowError>;

#[derive(thiserror::Error, Debug)]
pub enum DriftglowError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DriftglowError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            DriftglowError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            DriftglowError::render("x")
                .to_string()
                .contains("render error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = DriftglowError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
