//! Identifiers for sessions and for the turns logged within them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Key of one chat session in a session store.
///
/// Generated keys are v4 UUIDs; front ends may also key sessions by their
/// own strings (a browser tab, a chat channel).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::generate()
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tag shared by every log line of one submitted message, rendered as
/// eight hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnId(u32);

impl TurnId {
    pub fn generate() -> Self {
        let bytes = Uuid::new_v4().into_bytes();
        Self(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_session_id_is_v4_uuid() {
        let sid = SessionId::generate();
        let parsed = Uuid::parse_str(sid.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(sid, SessionId::generate());
    }

    #[test]
    fn session_id_from_external_key() {
        let sid = SessionId::from("browser-tab-7");
        assert_eq!(sid.as_str(), "browser-tab-7");
        assert_eq!(sid.to_string(), "browser-tab-7");
        assert_eq!(sid, SessionId::from(String::from("browser-tab-7")));
    }

    #[test]
    fn session_id_serializes_as_plain_string() {
        let sid = SessionId::from("abc");
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sid);
    }

    #[test]
    fn turn_id_renders_as_eight_hex_digits() {
        assert_eq!(TurnId(0xab).to_string(), "000000ab");

        let rendered = TurnId::generate().to_string();
        assert_eq!(rendered.len(), 8);
        assert!(rendered.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
