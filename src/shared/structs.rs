/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Passenger;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    pub floor: i32,
    pub direction: Direction,
    pub waiting: usize,
    pub onboard: usize,
}

/// Observation events emitted by the FSM, in simulation order. At any single
/// floor visit all `Exited` events precede all `Boarded` events.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    Arrived { floor: i32, direction: Direction },
    Boarded { passenger: Passenger },
    Exited { passenger: Passenger },
    Idle,
}
