//! Non-TUI command handling.

use std::process::ExitCode;

use crate::api::ApiClient;
use crate::constants;

/// Prints the current menu to stdout.
pub fn run_list(api_url: &str) -> ExitCode {
    let client = match ApiClient::new(api_url) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}{err}", constants::CLI_MSG_LIST_FAILED);
            return ExitCode::FAILURE;
        }
    };

    match client.list_plates() {
        Ok(plates) if plates.is_empty() => {
            println!("{}", constants::CLI_MSG_EMPTY_MENU);
            ExitCode::SUCCESS
        }
        Ok(plates) => {
            for plate in plates {
                let availability = if plate.available {
                    constants::LABEL_AVAILABLE
                } else {
                    constants::LABEL_UNAVAILABLE
                };
                println!(
                    "#{:<4} {:<28} {:>10}  [{availability}]  {}",
                    plate.id, plate.name, plate.price, plate.description
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}{err}", constants::CLI_MSG_LIST_FAILED);
            ExitCode::FAILURE
        }
    }
}
