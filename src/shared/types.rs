use serde::{Deserialize, Serialize};

/// Envelope written for every console command, one JSON object per line.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl<T> CommandResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> CommandResponse<()> {
        CommandResponse {
            success: false,
            data: None,
            message,
            errors,
        }
    }
}

impl<T: Serialize> CommandResponse<T> {
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
