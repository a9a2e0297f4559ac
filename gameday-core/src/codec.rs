//! JSON codec for the persisted appointment sequence.
//!
//! The slot holds the entire appointment list as one JSON array. Decoding
//! a present-but-malformed blob is data corruption and must surface as
//! [`StoreError::Corrupt`]; an absent blob is the store's concern, not the
//! codec's, and never reaches `decode`.

use crate::appointment::Appointment;
use crate::error::{StoreError, StoreResult};

/// Encode an appointment sequence to its stored text form.
///
/// Total for well-formed in-memory records; appointments are plain owned
/// data, so the error path is unreachable in practice.
pub fn encode(appointments: &[Appointment]) -> StoreResult<String> {
    serde_json::to_string(appointments).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Decode stored text back into an appointment sequence.
///
/// Callers must treat a failure as corruption, not as "empty".
pub fn decode(raw: &str) -> StoreResult<Vec<Appointment>> {
    serde_json::from_str(raw).map_err(|e| StoreError::Corrupt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::Guild;

    fn make_appointment(id: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            guild: Guild {
                id: "guild-1".to_string(),
                name: "Lendários".to_string(),
                icon: Some("a_1b2c3".to_string()),
                owner: true,
            },
            category: "1".to_string(),
            date: "10/05 às 20:30h".to_string(),
            description: "Rumo ao top 1".to_string(),
        }
    }

    #[test]
    fn round_trip_preserves_sequence() {
        let appointments = vec![make_appointment("a1"), make_appointment("a2")];
        let encoded = encode(&appointments).unwrap();
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded, appointments);
    }

    #[test]
    fn empty_sequence_round_trips() {
        let encoded = encode(&[]).unwrap();
        assert_eq!(decode(&encoded).unwrap(), vec![]);
    }

    #[test]
    fn decode_accepts_blob_written_by_the_mobile_app() {
        // Field names must stay wire-compatible with the original client.
        let raw = r#"[{
            "id": "a1",
            "guild": { "id": "g1", "name": "Lendários", "icon": null, "owner": false },
            "category": "2",
            "date": "10/05 às 20:30h",
            "description": "play"
        }]"#;

        let decoded = decode(raw).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, "a1");
        assert_eq!(decoded[0].guild.name, "Lendários");
        assert_eq!(decoded[0].guild.icon, None);
        assert_eq!(decoded[0].category, "2");
    }

    #[test]
    fn decode_garbage_is_corrupt() {
        let err = decode("not json at all").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn decode_truncated_blob_is_corrupt() {
        let mut ascii = make_appointment("a1");
        ascii.guild.name = "Legends".to_string();
        ascii.date = "10/05 20:30".to_string();
        ascii.description = "play".to_string();

        let encoded = encode(&[ascii]).unwrap();
        let truncated = &encoded[..encoded.len() / 2];
        let err = decode(truncated).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn decode_wrong_shape_is_corrupt() {
        // A JSON object instead of an array is still corruption.
        let err = decode(r#"{"id": "a1"}"#).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}
