/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ElevatorError;
use crate::shared::Result;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub passengers: Vec<PassengerConfig>,
}

#[derive(Deserialize, Clone)]
pub struct SimulationConfig {
    pub n_floors: i32,
    #[serde(default)]
    pub start_floor: i32,
}

#[derive(Deserialize, Clone, Copy)]
pub struct PassengerConfig {
    pub origin: i32,
    pub destination: i32,
}

impl SimulationConfig {
    pub fn max_floor(&self) -> i32 {
        self.n_floors - 1
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    validate(&config.simulation)?;
    Ok(config)
}

/// Loads additional passenger requests from a JSON array of
/// `{ "origin": _, "destination": _ }` records.
pub fn load_batch(path: &str) -> Result<Vec<PassengerConfig>> {
    let batch_str = fs::read_to_string(path)?;
    let batch: Vec<PassengerConfig> = serde_json::from_str(&batch_str)?;
    Ok(batch)
}

fn validate(simulation: &SimulationConfig) -> Result<()> {
    if simulation.n_floors < 2 {
        return Err(ElevatorError::ConfigError {
            message: "floor count must be more than 1".to_string(),
        });
    }
    if simulation.start_floor < 0 || simulation.start_floor > simulation.max_floor() {
        return Err(ElevatorError::ConfigError {
            message: format!(
                "start floor {} is outside [0, {}]",
                simulation.start_floor,
                simulation.max_floor()
            ),
        });
    }
    Ok(())
}

/***************************************/
/*             Unit tests              */
/***************************************/
