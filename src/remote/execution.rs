/// Engine's answer to a move submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    success: bool,
    message: Option<String>,
}

impl Execution {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
    pub fn rejected<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
    pub fn new(success: bool, message: Option<String>) -> Self {
        Self { success, message }
    }
    pub fn success(&self) -> bool {
        self.success
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
