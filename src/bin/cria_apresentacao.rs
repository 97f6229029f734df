//! Builds the Gestão DOM project presentation.

use domdeck::content::{PROJETO, PROJETO_PATH};
use domdeck::DeckBuilder;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match DeckBuilder::new().build(PROJETO_PATH, PROJETO) {
        Ok(()) => {
            log::info!("wrote {} slides to {}", PROJETO.len(), PROJETO_PATH);
            println!("Apresentação criada: {PROJETO_PATH}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("erro ao criar {PROJETO_PATH}: {err}");
            ExitCode::FAILURE
        },
    }
}
