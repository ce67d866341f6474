//! Text forms of the schedules and changes handed out to clients.
use serde::Serialize;

pub fn to_compact_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        to_pretty_json(value)
    } else {
        to_compact_json(value)
    }
}
