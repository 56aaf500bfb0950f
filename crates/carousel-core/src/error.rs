/// Failures a carousel can report while mounting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("no cards found inside the carousel track")]
    NoCards,

    #[error("invalid value {value:?} for attribute `{name}`")]
    InvalidAttribute { name: String, value: String },
}

impl CarouselError {
    pub fn invalid_attribute(name: &str, value: &str) -> Self {
        Self::InvalidAttribute {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
