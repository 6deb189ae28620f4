/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;
use crate::shared::ElevatorError;
use crate::shared::Result;

/**
 * A single travel request: one passenger riding from `origin_floor` to
 * `destination_floor`. The record is immutable once constructed and is
 * discarded by the FSM when the passenger has been delivered.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    pub origin_floor: i32,
    pub destination_floor: i32,
}

impl Passenger {
    pub fn new(origin_floor: i32, destination_floor: i32, max_floor: i32) -> Result<Passenger> {
        if origin_floor == destination_floor {
            return Err(ElevatorError::InvalidRequest {
                message: format!("origin and destination are both floor {}", origin_floor),
            });
        }
        if origin_floor < 0 || origin_floor > max_floor {
            return Err(ElevatorError::InvalidRequest {
                message: format!("origin floor {} is outside [0, {}]", origin_floor, max_floor),
            });
        }
        if destination_floor < 0 || destination_floor > max_floor {
            return Err(ElevatorError::InvalidRequest {
                message: format!(
                    "destination floor {} is outside [0, {}]",
                    destination_floor, max_floor
                ),
            });
        }

        Ok(Passenger {
            origin_floor,
            destination_floor,
        })
    }

    // Never `Idle`: construction rejects origin == destination.
    pub fn direction(&self) -> Direction {
        if self.destination_floor > self.origin_floor {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}
