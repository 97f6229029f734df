//! Builds the Gestão DOM strategic presentation.

use domdeck::content::{ESTRATEGICA, ESTRATEGICA_PATH};
use domdeck::DeckBuilder;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match DeckBuilder::new().build(ESTRATEGICA_PATH, ESTRATEGICA) {
        Ok(()) => {
            log::info!("wrote {} slides to {}", ESTRATEGICA.len(), ESTRATEGICA_PATH);
            println!("Apresentação criada: {ESTRATEGICA_PATH}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("erro ao criar {ESTRATEGICA_PATH}: {err}");
            ExitCode::FAILURE
        },
    }
}
