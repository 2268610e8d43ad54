use clap::Parser;
use empdb::commands::{Cli, Session};
use empdb::db::db::{ConnectionSettings, Db};
use empdb::db::employees::Employees;
use empdb::libs::config::{Config, CONFIG_FILE_NAME};
use empdb::libs::data_storage::APP_VERSION;
use empdb::libs::messages::macros::is_debug_mode;
use empdb::libs::messages::Message;
use empdb::libs::prompt::{LinePrompter, Prompter, TerminalPrompter};
use empdb::{msg_error, msg_info, msg_print, msg_success};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let default_level = if is_debug_mode() { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .init();

    msg_print!(Message::AppBanner(APP_VERSION.to_string()));

    let config = Config::load(CONFIG_FILE_NAME);
    let db = Db::new(ConnectionSettings::from_config(&config));

    if let Err(e) = db.test_connection() {
        msg_error!(Message::ConnectionFailed(e.to_string()));
        msg_info!(Message::ConnectionHint);
        return ExitCode::FAILURE;
    }
    msg_success!(Message::ConnectionEstablished(db.settings().target()));

    let interactive = io::stdin().is_terminal();
    let mut prompter: Box<dyn Prompter> = if interactive {
        Box::new(TerminalPrompter::new())
    } else {
        Box::new(LinePrompter::stdio())
    };

    let result = Session::new(Employees::new(db), prompter.as_mut()).with_pause(interactive).run();
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}
