//! Evaluation context

/// Inputs for one activation evaluation
#[derive(Debug, Clone, Default)]
pub struct ActivationContext {
    /// The user's prompt text
    pub prompt: String,

    /// Recently touched file paths, in the order supplied
    pub recent_files: Vec<String>,
}

impl ActivationContext {
    /// Create a context for a prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Add one recent file
    pub fn with_recent_file(mut self, file: impl Into<String>) -> Self {
        self.recent_files.push(file.into());
        self
    }

    /// Set the recent file snapshot
    pub fn with_recent_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recent_files = files.into_iter().map(Into::into).collect();
        self
    }
}
