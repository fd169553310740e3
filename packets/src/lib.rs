//! Wire vocabulary shared by the game server and its clients.
//!
//! Every frame is a JSON object tagged by `packet_type`, with the variant
//! body nested under `packet_data`.

use serde::{Deserialize, Serialize};

/// Packets a client sends to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "packet_type", content = "packet_data")]
pub enum ServerBound {
    ChoosePack {},
    JoinGame {
        code: String,
    },
    CreateGame {
        code: String,
        password: String,
        max_players: u8,
    },
}

/// Packets the server sends to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "packet_type", content = "packet_data")]
pub enum ClientBound {
    PackResponse { accepted: bool },
    RegisterPack,
}

/// Minimal view of an inbound frame: just enough to tell whether the
/// `packet_type` tag is present, without committing to a known variant.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPacket {
    #[serde(default)]
    pub packet_type: Option<String>,
    #[serde(default)]
    pub packet_data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tagged_server_bound() {
        let json = r#"{"packet_type":"JoinGame","packet_data":{"code":"abcd"}}"#;
        let packet: ServerBound = serde_json::from_str(json).unwrap();
        assert_eq!(packet, ServerBound::JoinGame { code: "abcd".into() });
    }

    #[test]
    fn encodes_client_bound_with_tag() {
        let json = serde_json::to_value(ClientBound::PackResponse { accepted: true }).unwrap();
        assert_eq!(json["packet_type"], "PackResponse");
        assert_eq!(json["packet_data"]["accepted"], true);
    }

    #[test]
    fn raw_packet_sees_missing_tag() {
        let raw: RawPacket = serde_json::from_str("{}").unwrap();
        assert!(raw.packet_type.is_none());
    }

    #[test]
    fn raw_packet_accepts_unknown_tag() {
        let raw: RawPacket =
            serde_json::from_str(r#"{"packet_type":"FutureThing","packet_data":[1,2]}"#).unwrap();
        assert_eq!(raw.packet_type.as_deref(), Some("FutureThing"));
        assert_eq!(raw.packet_data, serde_json::json!([1, 2]));
    }
}
