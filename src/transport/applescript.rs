//! Sends SMS through the macOS Messages app by shelling out to `osascript`.

use anyhow::Result;

use super::MessageTransport;

#[derive(Debug, Clone, Default)]
pub struct AppleScriptTransport;

impl AppleScriptTransport {
    pub fn new() -> Self {
        Self
    }
}

impl MessageTransport for AppleScriptTransport {
    #[cfg(target_os = "macos")]
    fn send(&self, recipient: &str, text: &str) -> Result<()> {
        use anyhow::{bail, Context};
        use std::process::Command;

        let script = build_send_script(recipient, text);
        let output = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output()
            .context("failed to spawn osascript")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "osascript exited with {} while sending to {}: {}",
                output.status,
                recipient,
                stderr.trim()
            );
        }

        Ok(())
    }

    #[cfg(not(target_os = "macos"))]
    fn send(&self, recipient: &str, text: &str) -> Result<()> {
        let _ = (recipient, text);
        anyhow::bail!("sending through Messages is only available on macOS")
    }
}

/// AppleScript that sends `text` to `recipient` over the SMS service.
pub fn build_send_script(recipient: &str, text: &str) -> String {
    format!(
        r#"tell application "Messages"
    set targetService to 1st service whose service type = SMS
    set targetBuddy to buddy "{}" of targetService
    send "{}" to targetBuddy
end tell"#,
        escape_applescript(recipient),
        escape_applescript(text)
    )
}

fn escape_applescript(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_targets_sms_buddy() {
        let script = build_send_script("5551234567", "How are you?");

        assert!(script.contains("service type = SMS"));
        assert!(script.contains(r#"buddy "5551234567" of targetService"#));
        assert!(script.contains(r#"send "How are you?" to targetBuddy"#));
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let script = build_send_script("555", r#"Say "hi" \ bye"#);

        assert!(script.contains(r#"send "Say \"hi\" \\ bye" to targetBuddy"#));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn send_fails_off_macos() {
        let err = AppleScriptTransport::new().send("555", "hi").unwrap_err();
        assert!(err.to_string().contains("only available on macOS"));
    }
}
