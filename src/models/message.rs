//! Messages exchanged between the popup and the content script

use super::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtensionMessage {
    /// Sent by the popup after the preference is saved.
    LanguageChanged { language: Language },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_changed_wire_format() {
        let message = ExtensionMessage::LanguageChanged { language: Language::ZhCn };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "LANGUAGE_CHANGED", "language": "zh_CN" }));
    }

    #[test]
    fn test_unknown_message_is_rejected() {
        let result: Result<ExtensionMessage, _> =
            serde_json::from_str(r#"{ "type": "PING" }"#);
        assert!(result.is_err());
    }
}
