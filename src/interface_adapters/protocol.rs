// Wire DTOs and conversions between host requests and domain commands/views.

use crate::domain::{
    CannonBallSnapshot, Command, CommandError, Orientation, PlayerView, ShipSnapshot,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum OrientationDto {
    Left,
    Right,
    Forward,
}

impl From<OrientationDto> for Orientation {
    fn from(orientation: OrientationDto) -> Self {
        match orientation {
            OrientationDto::Left => Orientation::Left,
            OrientationDto::Right => Orientation::Right,
            OrientationDto::Forward => Orientation::Forward,
        }
    }
}

/// Payload of a `setOrientation` request.
#[derive(Debug, Clone, Deserialize)]
struct SetOrientationPayload {
    orientation: OrientationDto,
    #[serde(default)]
    accelerating: bool,
}

/// Turns a host method call into a domain command.
///
/// Unknown methods and malformed payloads are `InvalidAction`; nothing is silently dropped.
pub fn decode_command(kind: &str, payload: &serde_json::Value) -> Result<Command, CommandError> {
    match kind {
        "join" => Ok(Command::Join),
        "fireCannon" => Ok(Command::FireCannon),
        "leave" => Ok(Command::Leave),
        "setOrientation" => {
            let payload = SetOrientationPayload::deserialize(payload)
                .map_err(|_| CommandError::InvalidAction)?;
            Ok(Command::SetOrientation {
                orientation: payload.orientation.into(),
                accelerating: payload.accelerating,
            })
        }
        _ => Err(CommandError::InvalidAction),
    }
}

/// Outcome of a command as reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResponseDto {
    Ok,
    Error { reason: String },
}

impl From<Result<(), CommandError>> for ResponseDto {
    fn from(result: Result<(), CommandError>) -> Self {
        match result {
            Ok(()) => ResponseDto::Ok,
            Err(error) => ResponseDto::Error {
                reason: error.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipDto {
    pub player: String,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub health: u32,
}

impl From<&ShipSnapshot> for ShipDto {
    fn from(ship: &ShipSnapshot) -> Self {
        Self {
            player: ship.player_id.clone(),
            x: ship.x,
            y: ship.y,
            angle: ship.angle,
            health: ship.health,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CannonBallDto {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl From<&CannonBallSnapshot> for CannonBallDto {
    fn from(ball: &CannonBallSnapshot) -> Self {
        Self {
            id: ball.id,
            x: ball.x,
            y: ball.y,
        }
    }
}

/// Per-player state pushed to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerViewDto {
    pub ships: Vec<ShipDto>,
    pub cannon_balls: Vec<CannonBallDto>,
    pub updated_at: u64,
}

impl From<&PlayerView> for PlayerViewDto {
    fn from(view: &PlayerView) -> Self {
        Self {
            ships: view.ships.iter().map(ShipDto::from).collect(),
            cannon_balls: view.cannon_balls.iter().map(CannonBallDto::from).collect(),
            updated_at: view.updated_at,
        }
    }
}
