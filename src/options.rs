#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub lang: String,
    pub dpi: Option<i32>,
    pub psm: Option<i32>,
    pub oem: Option<i32>,
    pub delimiter: u8,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
            dpi: None,
            psm: None,
            oem: None,
            delimiter: b',',
        }
    }
}
