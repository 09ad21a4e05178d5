use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot render an empty path")]
    InvalidPath,

    #[error("invalid render style: {0}")]
    InvalidStyle(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse render style: {0}")]
    Style(#[from] serde_json::Error),
}

impl RenderError {
    pub fn invalid_style(msg: impl Into<String>) -> Self {
        Self::InvalidStyle(msg.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert_eq!(
            RenderError::InvalidPath.to_string(),
            "cannot render an empty path"
        );
        assert!(RenderError::invalid_style("x")
            .to_string()
            .starts_with("invalid render style:"));
    }

    #[test]
    fn io_preserves_source() {
        let err = RenderError::from(std::io::Error::other("boom"));
        assert!(matches!(err, RenderError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}
