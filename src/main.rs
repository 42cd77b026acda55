use std::io;
use std::process::ExitCode;
use wotd_hangman::cli::{CliInterface, parse_cli};
use wotd_hangman::{logging, run};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let fetch_config = cli.fetch_config();
    let game_config = cli.game_config();

    let mut interface = CliInterface::new(io::stdin().lock(), io::stdout(), game_config.clear_screen);
    let code = run(
        &fetch_config,
        &game_config,
        &mut interface,
        &mut io::stdout(),
        &mut io::stderr(),
    );
    ExitCode::from(code)
}
