use serde::{Deserialize, Serialize};

/// One stored setting as the endpoint understands it.
///
/// `key` doubles as the DOM id of the toggle control that owns the setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingEntry {
    pub key: String,
    pub value: bool,
}

/// Body of a settings write.
///
/// The endpoint accepts a batch under `payload`; the widget always sends
/// exactly one entry per user toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub payload: Vec<SettingEntry>,
}

impl UpdateRequest {
    /// Single-entry request carrying one control's current state.
    pub fn single(key: impl Into<String>, value: bool) -> Self {
        Self {
            payload: vec![SettingEntry {
                key: key.into(),
                value,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_entry_shape() {
        let req = UpdateRequest::single("dark_mode", true);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "payload": [ { "key": "dark_mode", "value": true } ] })
        );
    }

    #[test]
    fn test_single_entry_false_value() {
        let req = UpdateRequest::single("notify_email", false);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "payload": [ { "key": "notify_email", "value": false } ] })
        );
    }

    #[test]
    fn test_repeat_submissions_are_identical() {
        let a = UpdateRequest::single("beta_features", true);
        let b = UpdateRequest::single("beta_features", true);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
