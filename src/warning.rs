#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    EmptyRecognizedText,
    RaggedRowWidths,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractWarning {
    pub code: WarningCode,
    pub message: String,
}

impl ExtractWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
