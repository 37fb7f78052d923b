//! Wire envelopes and actor messages for the game session.
//!
//! Every frame is `{"key": ..., "data": ...}` JSON text.

use actix::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::entities::{Player, TeamInfo};
use crate::game::round::Phase;
use crate::game::state::Board;
use crate::game::types::{Card, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerRegistration {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardSubmission {
    pub id: PlayerId,
    /// Indices into the dealt hand, in play order.
    pub cards: Vec<usize>,
}

/// Frames a client may send.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "key", content = "data", rename_all = "kebab-case")]
pub enum ClientMessage {
    CheckPlayer(PlayerId),
    Player(PlayerRegistration),
    Display,
    SubmitCards(CardSubmission),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardReveal {
    /// Display name of the player.
    pub player: String,
    pub color: String,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeNotice {
    pub seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorNotice {
    pub code: String,
    pub message: String,
}

/// Frames sent to clients.
#[derive(Message, Debug, Clone, Serialize)]
#[rtype(result = "()")]
#[serde(tag = "key", content = "data", rename_all = "kebab-case")]
pub enum ServerMessage {
    Player(Option<Player>),
    Team(TeamInfo),
    Cards(Vec<Card>),
    Board(Board),
    Card(CardReveal),
    Time(TimeNotice),
    Error(ErrorNotice),
}

/// A parsed client frame, tagged with the connection it came from.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ClientEnvelope {
    pub conn_id: Uuid,
    pub addr: Recipient<ServerMessage>,
    pub msg: ClientMessage,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub conn_id: Uuid,
}

/// Administrative trigger. Answers whether a round was dealt.
#[derive(Message)]
#[rtype(result = "bool")]
pub struct StartGame;

#[derive(Message)]
#[rtype(result = "Phase")]
pub struct GetPhase;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::game::types::ActionKind;

    #[test]
    fn test_parse_client_frames() {
        let check: ClientMessage = serde_json::from_str(r#"{"key":"check-player","data":"abc"}"#).unwrap();
        assert_eq!(check, ClientMessage::CheckPlayer("abc".into()));

        let join: ClientMessage = serde_json::from_str(r#"{"key":"player","data":{"id":"abc","name":"Rex"}}"#).unwrap();
        assert_eq!(
            join,
            ClientMessage::Player(PlayerRegistration {
                id: "abc".into(),
                name: "Rex".into()
            })
        );

        let display: ClientMessage = serde_json::from_str(r#"{"key":"display"}"#).unwrap();
        assert_eq!(display, ClientMessage::Display);

        let submit: ClientMessage =
            serde_json::from_str(r#"{"key":"submit-cards","data":{"id":"abc","cards":[4,3,2,1,0]}}"#).unwrap();
        assert_eq!(
            submit,
            ClientMessage::SubmitCards(CardSubmission {
                id: "abc".into(),
                cards: vec![4, 3, 2, 1, 0]
            })
        );
    }

    #[test]
    fn test_reject_unknown_key() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"key":"dance","data":{}}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>("not json").is_err());
    }

    #[test]
    fn test_server_frames_shape() {
        let cards = ServerMessage::Cards(vec![Card::new(30, ActionKind::Kick)]);
        assert_eq!(serde_json::to_value(&cards).unwrap(), json!({"key": "cards", "data": [{"p": 30, "a": 4}]}));

        let none = ServerMessage::Player(None);
        assert_eq!(serde_json::to_value(&none).unwrap(), json!({"key": "player", "data": null}));

        let reveal = ServerMessage::Card(CardReveal {
            player: "Rex".into(),
            color: "#FF0000".into(),
            card: Card::new(10, ActionKind::Move1),
        });
        assert_eq!(
            serde_json::to_value(&reveal).unwrap(),
            json!({"key": "card", "data": {"player": "Rex", "color": "#FF0000", "card": {"p": 10, "a": 1}}})
        );

        let time = ServerMessage::Time(TimeNotice { seconds: 30 });
        assert_eq!(serde_json::to_value(&time).unwrap(), json!({"key": "time", "data": {"seconds": 30}}));
    }
}
