/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::elevator::Passenger;
use crate::shared::Direction;
use crate::shared::ElevatorError;
use crate::shared::ElevatorState;
use crate::shared::Result;
use crate::shared::SimEvent;

/**
 * Manages elevator dispatch and movement logic.
 *
 * The `ElevatorFSM` (Finite State Machine) sequences a batch of passenger
 * requests into a deterministic path. Each `step` advances the simulation by
 * one tick: move one floor in the direction of travel, deliver passengers
 * destined for the reached floor, board passengers heading the same way, then
 * recompute the direction. Observations are sent on `event_tx` for the run
 * loop to consume.
 *
 * # Fields
 * - `event_tx`:        Sends observation events (arrivals, boardings, exits).
 * - `max_floor`:       Highest serviceable floor (the lowest is 0).
 * - `current_floor`:   The floor the cab currently occupies.
 * - `direction`:       Current travel state (`Idle`, `Up` or `Down`).
 * - `waiting`:         Requested passengers not yet picked up, request order.
 * - `onboard`:         Picked-up passengers not yet delivered.
 */
pub struct ElevatorFSM {
    event_tx: cbc::Sender<SimEvent>,
    max_floor: i32,
    current_floor: i32,
    direction: Direction,
    waiting: Vec<Passenger>,
    onboard: Vec<Passenger>,
}

impl ElevatorFSM {
    pub fn new(config: &SimulationConfig, event_tx: cbc::Sender<SimEvent>) -> ElevatorFSM {
        ElevatorFSM {
            event_tx,
            max_floor: config.max_floor(),
            current_floor: config.start_floor,
            direction: Direction::Idle,
            waiting: Vec::new(),
            onboard: Vec::new(),
        }
    }

    /// Queues a passenger for pickup. Movement is driven by `step`, never by
    /// the request itself.
    pub fn request(&mut self, passenger: Passenger) -> Result<()> {
        for floor in [passenger.origin_floor, passenger.destination_floor] {
            if floor < 0 || floor > self.max_floor {
                return Err(ElevatorError::InvalidRequest {
                    message: format!("floor {} is outside [0, {}]", floor, self.max_floor),
                });
            }
        }

        self.waiting.push(passenger);
        Ok(())
    }

    /// Advances the simulation by one tick and returns the resulting state.
    /// With no passengers waiting or onboard this is a no-op.
    pub fn step(&mut self) -> ElevatorState {
        if self.waiting.is_empty() && self.onboard.is_empty() {
            return self.state();
        }

        match self.direction {
            Direction::Idle => {
                // Dispatch tick: pick a direction and serve the current
                // floor. Movement starts on the next tick.
                self.direction = self.initial_direction();
            }
            Direction::Up => {
                if self.current_floor < self.max_floor {
                    self.current_floor += 1;
                    self.emit(SimEvent::Arrived {
                        floor: self.current_floor,
                        direction: Direction::Up,
                    });
                }
            }
            Direction::Down => {
                if self.current_floor > 0 {
                    self.current_floor -= 1;
                    self.emit(SimEvent::Arrived {
                        floor: self.current_floor,
                        direction: Direction::Down,
                    });
                }
            }
        }

        self.complete_exits();
        self.complete_boardings();
        self.update_direction();

        self.state()
    }

    /// Steps until every passenger has been delivered. Fails with `Deadlock`
    /// once the iteration bound is exceeded, which catches requests that can
    /// never be served (e.g. floors outside the building).
    pub fn run_to_completion(&mut self) -> Result<u64> {
        let n_passengers = (self.waiting.len() + self.onboard.len()) as u64;
        let n_floors = (self.max_floor + 1) as u64;
        let max_steps = 4 * n_floors * n_passengers;

        let mut steps: u64 = 0;
        while !(self.waiting.is_empty() && self.onboard.is_empty()) {
            if steps >= max_steps {
                return Err(ElevatorError::Deadlock { steps });
            }
            self.step();
            steps += 1;
        }

        Ok(steps)
    }

    pub fn state(&self) -> ElevatorState {
        ElevatorState {
            floor: self.current_floor,
            direction: self.direction,
            waiting: self.waiting.len(),
            onboard: self.onboard.len(),
        }
    }

    // Exits strictly before boardings at every floor visit.
    fn complete_exits(&mut self) {
        let onboard = std::mem::take(&mut self.onboard);
        for passenger in onboard {
            if passenger.destination_floor == self.current_floor {
                self.emit(SimEvent::Exited { passenger });
            } else {
                self.onboard.push(passenger);
            }
        }
    }

    fn complete_boardings(&mut self) {
        let waiting = std::mem::take(&mut self.waiting);
        for passenger in waiting {
            if passenger.origin_floor == self.current_floor
                && passenger.direction() == self.direction
            {
                self.emit(SimEvent::Boarded { passenger });
                self.onboard.push(passenger);
            } else {
                self.waiting.push(passenger);
            }
        }
    }

    fn update_direction(&mut self) {
        let next = self.choose_direction();
        if next == Direction::Idle && self.direction != Direction::Idle {
            self.emit(SimEvent::Idle);
        }
        self.direction = next;
    }

    // Continue in the direction of travel while work remains there; reverse
    // when the only remaining work lies behind; otherwise go idle. A waiting
    // passenger left standing at the current floor is picked up by the next
    // dispatch tick.
    fn choose_direction(&self) -> Direction {
        if self.has_orders_in_direction(self.direction) {
            return self.direction;
        }

        if self.direction == Direction::Up && self.has_orders_in_direction(Direction::Down) {
            return Direction::Down;
        }
        if self.direction == Direction::Down && self.has_orders_in_direction(Direction::Up) {
            return Direction::Up;
        }

        Direction::Idle
    }

    fn has_orders_in_direction(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => {
                self.waiting
                    .iter()
                    .any(|p| p.origin_floor > self.current_floor)
                    || self
                        .onboard
                        .iter()
                        .any(|p| p.destination_floor > self.current_floor)
            }
            Direction::Down => {
                self.waiting
                    .iter()
                    .any(|p| p.origin_floor < self.current_floor)
                    || self
                        .onboard
                        .iter()
                        .any(|p| p.destination_floor < self.current_floor)
            }
            Direction::Idle => false,
        }
    }

    // The nearest floor that needs service decides the starting direction;
    // ties between equally distant floors resolve upwards. For a passenger
    // already at the current floor the direction is the one they travel in.
    fn initial_direction(&self) -> Direction {
        let mut best: Option<(i32, Direction)> = None;

        let candidates = self
            .waiting
            .iter()
            .map(|p| (p.origin_floor, p.direction()))
            .chain(
                self.onboard
                    .iter()
                    .map(|p| (p.destination_floor, p.direction())),
            );

        for (floor, here) in candidates {
            let distance = (floor - self.current_floor).abs();
            let direction = if floor > self.current_floor {
                Direction::Up
            } else if floor < self.current_floor {
                Direction::Down
            } else {
                here
            };

            let better = match best {
                None => true,
                Some((best_distance, best_direction)) => {
                    distance < best_distance
                        || (distance == best_distance
                            && direction == Direction::Up
                            && best_direction == Direction::Down)
                }
            };
            if better {
                best = Some((distance, direction));
            }
        }

        match best {
            Some((_, direction)) => direction,
            None => Direction::Idle,
        }
    }

    fn emit(&self, event: SimEvent) {
        let _ = self.event_tx.send(event);
    }
}

/***************************************/
/*            Test helpers             */
/***************************************/
#[cfg(test)]
impl ElevatorFSM {
    pub fn test_set_floor(&mut self, floor: i32) {
        self.current_floor = floor;
    }

    pub fn test_set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn test_inject_waiting(&mut self, passenger: Passenger) {
        self.waiting.push(passenger);
    }

    pub fn test_inject_onboard(&mut self, passenger: Passenger) {
        self.onboard.push(passenger);
    }

    pub fn test_choose_direction(&self) -> Direction {
        self.choose_direction()
    }

    pub fn test_has_orders_in_direction(&self, direction: Direction) -> bool {
        self.has_orders_in_direction(direction)
    }

    pub fn test_initial_direction(&self) -> Direction {
        self.initial_direction()
    }
}
