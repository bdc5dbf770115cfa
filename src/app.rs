use std::io::{self, stdout, BufWriter, Read, Write};

use crate::{
    common::error::AppError,
    config::{Config, DEMO_ACCOUNTS},
    domain::{bank::Bank, session::Session},
    io::{reader, writer},
    view::Screen,
    worker::controller::Controller,
};

pub fn run(config: &Config) -> Result<(), AppError> {
    let bank = match &config.accounts {
        Some(path) => load_bank(std::fs::File::open(path)?)?,
        None => load_bank(DEMO_ACCOUNTS.as_bytes())?,
    };
    tracing::info!(accounts = bank.len(), "accounts loaded");

    let mut session = Session::new(bank);
    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &config.script {
        Some(path) => replay(
            &mut session,
            std::fs::File::open(path)?,
            &mut out,
            &config.currency,
            config.quiet,
        )?,
        None => replay(
            &mut session,
            io::stdin().lock(),
            &mut out,
            &config.currency,
            config.quiet,
        )?,
    }

    if config.summary {
        writer::write_accounts(&mut out, session.bank().accounts())?;
    }
    out.flush()?;
    Ok(())
}

/// Builds the account store from an accounts CSV.
pub fn load_bank<R: Read>(input: R) -> Result<Bank, AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let accounts = reader::read_accounts(&mut rdr).map_err(AppError::Parse)?;
    Bank::new(accounts)
}

/// Feeds every action of `script` through the controller, writing one outcome
/// line per action and, unless `quiet`, the screen after each accepted one.
pub fn replay<R: Read, W: Write>(
    session: &mut Session,
    script: R,
    mut out: W,
    currency: &str,
    quiet: bool,
) -> Result<(), AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(script);
    let mut controller = Controller::new();

    for action in reader::read_actions(&mut rdr) {
        let action = action.map_err(AppError::Parse)?;
        let name = action.name();
        let outcome = controller.process(session, action);

        writer::write_outcome(&mut out, name, &outcome)?;
        if outcome.is_accepted() && !quiet {
            writer::write_screen(&mut out, &Screen::of(session), currency)?;
        }
    }

    Ok(())
}
