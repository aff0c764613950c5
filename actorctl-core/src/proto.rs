//! # Actor Service Messages
//!
//! The message types of the `proto_actor.ActorService` contract, written out with
//! explicit `prost` field attributes so the wire mapping is visible at a glance.
//!
//! Every message carries two codecs:
//!
//! * **Binary** (`prost`): standard Protobuf tag/length/value encoding. Fields equal
//!   to their zero value (empty string, empty list) are omitted from the output, and
//!   unknown fields are skipped on decode by their wire-type.
//! * **JSON** (`serde`): `camelCase` field names, matching what the service's previous
//!   browser consumers exchanged. Unlike the binary encoding, zero values ARE emitted
//!   on serialize; absent or `null` fields map back to zero values on deserialize.
//!   The asymmetry between the two encodings is part of the contract.
use serde::{Deserialize, Deserializer, Serialize};

/// Liveness check request.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingRequest {
    #[prost(string, tag = "1")]
    #[serde(default, deserialize_with = "null_to_default")]
    pub id: String,
}

/// Liveness check response. Carries the id of the request it answers.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    #[prost(string, tag = "1")]
    #[serde(default, deserialize_with = "null_to_default")]
    pub id: String,
}

/// Requests the current list of running actors. Has no fields.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorsRunningGetRequest {}

/// One running actor, as tracked by the registry.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorsRunningGetResponseItem {
    #[prost(string, tag = "1")]
    #[serde(default, deserialize_with = "null_to_default")]
    pub actor_id: String,
    #[prost(string, tag = "2")]
    #[serde(default, deserialize_with = "null_to_default")]
    pub actor_name: String,
    #[prost(string, tag = "3")]
    #[serde(default, deserialize_with = "null_to_default")]
    pub actor_type: String,
}

/// The ordered list of running actors.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorsRunningGetResponse {
    #[prost(message, repeated, tag = "1")]
    #[serde(default, deserialize_with = "null_to_default")]
    pub items: Vec<ActorsRunningGetResponseItem>,
}

// JSON `null` is treated the same as an absent field.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use serde_json::json;

    fn worker() -> ActorsRunningGetResponseItem {
        ActorsRunningGetResponseItem {
            actor_id: "1".to_string(),
            actor_name: "worker".to_string(),
            actor_type: "compute".to_string(),
        }
    }

    #[test]
    fn encodes_and_decodes_an_actor_item() {
        let item = worker();

        let bytes = item.encode_to_vec();
        let decoded = ActorsRunningGetResponseItem::decode(bytes.as_slice()).unwrap();

        assert_eq!(decoded, item);
    }

    #[test]
    fn string_fields_use_length_delimited_encoding() {
        let request = PingRequest {
            id: "x".to_string(),
        };

        // field 1, wire-type 2, one byte of payload
        assert_eq!(request.encode_to_vec(), vec![0x0a, 0x01, b'x']);
    }

    #[test]
    fn zero_valued_messages_encode_to_no_bytes() {
        assert!(PingRequest::default().encode_to_vec().is_empty());
        assert!(PingResponse::default().encode_to_vec().is_empty());
        assert!(ActorsRunningGetRequest::default().encode_to_vec().is_empty());
        assert!(
            ActorsRunningGetResponseItem::default()
                .encode_to_vec()
                .is_empty()
        );
        assert!(
            ActorsRunningGetResponse::default()
                .encode_to_vec()
                .is_empty()
        );
    }

    #[test]
    fn response_round_trip_preserves_item_order() {
        let response = ActorsRunningGetResponse {
            items: vec![
                worker(),
                ActorsRunningGetResponseItem {
                    actor_id: "2".to_string(),
                    actor_name: "janitor".to_string(),
                    actor_type: "maintenance".to_string(),
                },
            ],
        };

        let bytes = response.encode_to_vec();
        let decoded = ActorsRunningGetResponse::decode(bytes.as_slice()).unwrap();

        assert_eq!(decoded.items.len(), 2);
        assert_eq!(decoded.items[0].actor_name, "worker");
        assert_eq!(decoded.items[1].actor_name, "janitor");
    }

    #[test]
    fn unknown_fields_are_skipped_on_decode() {
        let item = worker();
        let mut bytes = item.encode_to_vec();

        // field 6 as a varint, field 7 as a length-delimited block
        bytes.extend_from_slice(&[0x30, 0x2a]);
        bytes.extend_from_slice(&[0x3a, 0x03, b'a', b'b', b'c']);

        let decoded = ActorsRunningGetResponseItem::decode(bytes.as_slice()).unwrap();

        assert_eq!(decoded, item);
    }

    #[test]
    fn json_output_keeps_zero_values() {
        let empty_item = serde_json::to_value(ActorsRunningGetResponseItem::default()).unwrap();
        let empty_list = serde_json::to_value(ActorsRunningGetResponse::default()).unwrap();

        assert_eq!(
            empty_item,
            json!({ "actorId": "", "actorName": "", "actorType": "" })
        );
        assert_eq!(empty_list, json!({ "items": [] }));
    }

    #[test]
    fn json_round_trip_is_total() {
        let response = ActorsRunningGetResponse {
            items: vec![worker(), ActorsRunningGetResponseItem::default()],
        };

        let value = serde_json::to_value(&response).unwrap();
        let decoded: ActorsRunningGetResponse = serde_json::from_value(value).unwrap();

        assert_eq!(decoded, response);
    }

    #[test]
    fn json_field_names_are_camel_case() {
        let value = serde_json::to_value(worker()).unwrap();

        assert_eq!(
            value,
            json!({ "actorId": "1", "actorName": "worker", "actorType": "compute" })
        );
    }

    #[test]
    fn json_null_and_missing_fields_map_to_defaults() {
        let item: ActorsRunningGetResponseItem =
            serde_json::from_value(json!({ "actorId": "7", "actorName": null })).unwrap();

        assert_eq!(item.actor_id, "7");
        assert_eq!(item.actor_name, "");
        assert_eq!(item.actor_type, "");

        let response: ActorsRunningGetResponse =
            serde_json::from_value(json!({ "items": null })).unwrap();
        assert!(response.items.is_empty());

        let request: PingRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.id, "");
    }

    #[test]
    fn json_unknown_keys_are_ignored() {
        let request: PingRequest =
            serde_json::from_value(json!({ "id": "a", "extra": 42 })).unwrap();

        assert_eq!(request.id, "a");
    }
}
