/* 3rd party libraries */
use clap::Arg;
use clap::Command;
use crossbeam_channel as cbc;
use log::error;
use log::info;

/* Custom libraries */
use config::PassengerConfig;
use elevator::ElevatorFSM;
use elevator::Passenger;
use shared::SimEvent;

/* Modules */
#[macro_use]
mod shared;
mod config;
mod elevator;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator-sim")
        .about("Single-elevator dispatch simulator")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the simulation configuration file"),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .takes_value(true)
                .help("Path to a JSON file with additional passenger requests"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path));

    // Assemble the passenger batch: config file first, then the batch file
    let mut batch: Vec<PassengerConfig> = config.passengers.clone();
    if let Some(batch_path) = matches.value_of("batch") {
        batch.extend(unwrap_or_exit!(config::load_batch(batch_path)));
    }

    // Initialize channels
    let (event_tx, event_rx) = cbc::unbounded::<SimEvent>();

    // Start the elevator module
    let mut fsm = ElevatorFSM::new(&config.simulation, event_tx);
    let max_floor = config.simulation.max_floor();
    for request in &batch {
        let passenger =
            unwrap_or_exit!(Passenger::new(request.origin, request.destination, max_floor));
        unwrap_or_exit!(fsm.request(passenger));
    }

    info!(
        "Simulating {} passengers across {} floors",
        batch.len(),
        config.simulation.n_floors
    );

    let steps = unwrap_or_exit!(fsm.run_to_completion());

    // Render the observation stream
    for event in event_rx.try_iter() {
        match event {
            SimEvent::Arrived { floor, direction } => {
                info!("Elevator arrived at floor {} going {:?}", floor, direction)
            }
            SimEvent::Boarded { passenger } => info!(
                "Passenger {} -> {} boarded at floor {}",
                passenger.origin_floor, passenger.destination_floor, passenger.origin_floor
            ),
            SimEvent::Exited { passenger } => info!(
                "Passenger {} -> {} exited at floor {}",
                passenger.origin_floor, passenger.destination_floor, passenger.destination_floor
            ),
            SimEvent::Idle => info!("Elevator is idle"),
        }
    }

    info!("Simulation complete after {} steps", steps);
}
