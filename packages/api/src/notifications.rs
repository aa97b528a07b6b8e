//! # Realtime notification wire format
//!
//! Inbound frames on the realtime channel are JSON objects with a `type`
//! discriminator:
//!
//! ```json
//! {"type": "CHEQUE_PROCESSED", "title": "Done", "message": "ok"}
//! ```
//!
//! The two check-lifecycle discriminators get dedicated variants (they drive
//! distinct toast styling); any other *well-formed* frame maps to
//! [`NotificationKind::Other`] and renders with the neutral styling.
//! Malformed frames — not JSON, wrong shape, missing fields — are rejected
//! with an error the channel logs and drops; they never crash the client.

use serde::Deserialize;

/// Discriminator of an inbound notification frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    ChequeReceived,
    ChequeProcessed,
    /// Well-formed frame with a discriminator this client does not style
    /// specially. The raw tag is kept for logging.
    Other(String),
}

impl NotificationKind {
    fn from_wire(tag: &str) -> Self {
        match tag {
            "CHEQUE_RECEIVED" => NotificationKind::ChequeReceived,
            "CHEQUE_PROCESSED" => NotificationKind::ChequeProcessed,
            other => NotificationKind::Other(other.to_string()),
        }
    }
}

/// A decoded notification. Ephemeral: lives exactly as long as its toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

#[derive(Deserialize)]
struct RawFrame {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    message: String,
}

impl NotificationEvent {
    /// Decode a text frame. Errors mean the frame is malformed and should be
    /// logged and dropped by the caller.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let raw: RawFrame = serde_json::from_str(text)?;
        Ok(Self {
            kind: NotificationKind::from_wire(&raw.kind),
            title: raw.title,
            message: raw.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_frame_parses() {
        let event =
            NotificationEvent::parse(r#"{"type":"CHEQUE_PROCESSED","title":"Done","message":"ok"}"#)
                .unwrap();
        assert_eq!(event.kind, NotificationKind::ChequeProcessed);
        assert_eq!(event.title, "Done");
        assert_eq!(event.message, "ok");
    }

    #[test]
    fn received_frame_parses() {
        let event = NotificationEvent::parse(
            r#"{"type":"CHEQUE_RECEIVED","title":"New","message":"cheque in"}"#,
        )
        .unwrap();
        assert_eq!(event.kind, NotificationKind::ChequeReceived);
    }

    #[test]
    fn unknown_discriminator_maps_to_other() {
        let event = NotificationEvent::parse(
            r#"{"type":"ACCOUNT_FLAGGED","title":"t","message":"m"}"#,
        )
        .unwrap();
        assert_eq!(
            event.kind,
            NotificationKind::Other("ACCOUNT_FLAGGED".to_string())
        );
    }

    #[test]
    fn malformed_frames_are_rejected() {
        assert!(NotificationEvent::parse("not json").is_err());
        assert!(NotificationEvent::parse(r#"{"title":"t","message":"m"}"#).is_err());
        assert!(NotificationEvent::parse(r#"{"type":"CHEQUE_PROCESSED"}"#).is_err());
        assert!(NotificationEvent::parse("42").is_err());
    }
}
