/// The verdict of a precheck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecheckResult {
    pub error: bool,
    pub message: String,
}

impl PrecheckResult {
    pub fn pass() -> Self {
        PrecheckResult {
            error: false,
            message: String::new(),
        }
    }

    pub fn reject(message: impl Into<String>) -> Self {
        PrecheckResult {
            error: true,
            message: message.into(),
        }
    }
}

/// A fast guard evaluated before a parser's matching function
pub trait Precheck {
    fn check(&self, text: &str, position: usize) -> PrecheckResult;
}

impl<F> Precheck for F
where
    F: Fn(&str, usize) -> PrecheckResult,
{
    fn check(&self, text: &str, position: usize) -> PrecheckResult {
        self(text, position)
    }
}

/// Rejects positions strictly past the end of the input
pub fn within_bounds(text: &str, position: usize) -> PrecheckResult {
    if position > text.len() {
        PrecheckResult::reject(format!(
            "input length ({}) exceeded by checked position ({})",
            text.len(),
            position
        ))
    } else {
        PrecheckResult::pass()
    }
}
