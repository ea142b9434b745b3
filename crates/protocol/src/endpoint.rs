/// Path served by the settings collaborator for both reads and writes.
pub const SETTINGS_ENDPOINT: &str = "/update-user-settings";

/// URL for reading one stored setting.
pub fn read_url(key: &str) -> String {
    format!("{SETTINGS_ENDPOINT}?key={key}")
}

/// Interpret a read response body.
///
/// The endpoint answers in plain text and only the exact literal `"True"`
/// means enabled. This is a strict string comparison, not a boolean parse:
/// `"true"`, `"False"`, whitespace-padded and malformed bodies all read as
/// disabled.
pub fn setting_enabled(body: &str) -> bool {
    body == "True"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_url() {
        assert_eq!(read_url("dark_mode"), "/update-user-settings?key=dark_mode");
    }

    #[test]
    fn test_setting_enabled_exact_literal() {
        assert!(setting_enabled("True"));
    }

    #[test]
    fn test_setting_enabled_rejects_everything_else() {
        assert!(!setting_enabled("False"));
        assert!(!setting_enabled("true"));
        assert!(!setting_enabled("TRUE"));
        assert!(!setting_enabled(""));
        assert!(!setting_enabled(" True"));
        assert!(!setting_enabled("True\n"));
        assert!(!setting_enabled("1"));
        assert!(!setting_enabled("<html>error</html>"));
    }
}
