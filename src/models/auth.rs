use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub passcode: String,
}

// The server answers with an arbitrary JSON value ("Login Success" on the
// reference server). Only its presence matters.
pub type VerifyTotpResponse = serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_serialize_with_wire_keys() {
        let credentials = Credentials {
            username: "alice".to_owned(),
            passcode: "123456".to_owned(),
        };
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "username": "alice", "passcode": "123456" })
        );
    }
}
