use crate::core::Timestamp;

crate::domain_model! {
    /// A resource touched by an action.
    pub struct ActionResource {
        pub id: Option<i64>,
        pub kind as "type": Option<String>,
    }
}

crate::domain_model! {
    pub struct ActionError {
        pub code: Option<String>,
        pub message: Option<String>,
    }
}

crate::domain_model! {
    /// An asynchronous operation started by the API.
    pub struct Action {
        pub id: Option<i64>,
        pub command: Option<String>,
        pub status: Option<String>,
        pub progress: i64,
        pub started: Option<Timestamp>,
        pub finished: Option<Timestamp>,
        pub resources: Vec<ActionResource>,
        pub error: Option<ActionError>,
    }
}

impl Action {
    pub const STATUS_RUNNING: &'static str = "running";
    pub const STATUS_SUCCESS: &'static str = "success";
    pub const STATUS_ERROR: &'static str = "error";

    pub fn is_running(&self) -> bool {
        self.status.as_deref() == Some(Self::STATUS_RUNNING)
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(Self::STATUS_SUCCESS)
    }

    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some(Self::STATUS_ERROR)
    }

    /// Whether the action touched the resource of the given type and id.
    pub fn affects(&self, kind: &str, id: i64) -> bool {
        self.resources
            .iter()
            .any(|r| r.id == Some(id) && r.kind.as_deref() == Some(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BaseDomain;
    use serde_json::json;

    #[test]
    fn test_status_helpers() {
        let action = Action::from_value(&json!({"id": 1, "status": "running", "progress": 40}));
        assert!(action.is_running());
        assert!(!action.is_success());
        assert!(!action.is_error());
        assert_eq!(action.progress, 40);
    }

    #[test]
    fn test_failed_action_carries_error() {
        let action = Action::from_value(&json!({
            "id": 2,
            "status": "error",
            "error": {"code": "action_failed", "message": "Action failed"}
        }));
        assert!(action.is_error());
        let error = action.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("action_failed"));
    }

    #[test]
    fn test_affects() {
        let action = Action::from_value(&json!({
            "id": 3,
            "resources": [{"id": 42, "type": "server"}, {"id": 7, "type": "image"}]
        }));
        assert!(action.affects("server", 42));
        assert!(action.affects("image", 7));
        assert!(!action.affects("image", 42));
    }
}
