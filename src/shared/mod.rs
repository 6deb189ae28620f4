pub mod error;
#[macro_use]
pub mod macros;
pub mod structs;

pub use error::ElevatorError;
pub use error::Result;
pub use structs::Direction;
pub use structs::ElevatorState;
pub use structs::SimEvent;
