pub mod fsm;
pub mod passenger;

pub use fsm::ElevatorFSM;
pub use passenger::Passenger;
