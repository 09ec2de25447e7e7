//! Sampling parameters sent with every completion request.

/// Fixed generation parameters.
///
/// The relay never varies these per request; `Default` is the production set.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub stop: Option<Vec<String>>,
    pub stream: bool,
}

impl GenerationParams {
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 1024;
    pub const DEFAULT_TOP_P: f32 = 1.0;
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: Self::DEFAULT_TEMPERATURE,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            top_p: Self::DEFAULT_TOP_P,
            stop: None,
            stream: false,
        }
    }
}
