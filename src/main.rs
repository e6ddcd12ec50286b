use std::env;
use std::process::ExitCode;

use clap::{ Arg, ArgAction, ArgMatches, Command };
use colored::Colorize;
use tracing::info;

use progopts::{
    EnumValueParser,
    Literal,
    OptionContributor,
    OptionEnum,
    Outcome,
    Result,
    enum_arg,
    logging,
    parse_program_options,
};

/// Where orders are sent.
#[derive(PartialEq, Debug, Default, Clone, Copy, strum_macros::EnumIter, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
enum Venue {
    #[default]
    Paper,
    Live,
}

impl OptionEnum for Venue {}

#[derive(PartialEq, Debug, Default, Clone, Copy, strum_macros::EnumIter, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl OptionEnum for LogLevel {}

/// Connection settings.
#[derive(clap::Args, Debug, Default)]
struct ServerOptions {
    /// host to connect to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// port to connect to
    #[arg(long)]
    port: u16,
    /// where orders are sent
    #[arg(long, value_name = "VALUE", value_parser = EnumValueParser::<Venue>::new(), default_value = "paper")]
    venue: Venue,
}

#[derive(Debug, Default)]
struct ReportOptions {
    log_level: LogLevel,
    quiet: bool,
}

impl OptionContributor for ReportOptions {
    fn add_options(&self, cmd: Command) -> Command {
        cmd.arg(enum_arg::<LogLevel>("log-level")
                .help("level of the run report")
                .default_value(self.log_level.literal())
            )
            .arg(Arg::new("quiet")
                 .long("quiet")
                 .help("don't print the run report")
                 .action(ArgAction::SetTrue)
            )
    }

    fn notify(&mut self, matches: &ArgMatches) -> Result {
        if let Some(level) = matches.get_one::<LogLevel>("log-level") {
            self.log_level = *level;
        }
        self.quiet = matches.get_flag("quiet");
        Ok(())
    }
}

fn main() -> ExitCode {
    logging::init();
    let mut server = ServerOptions::default();
    let mut report = ReportOptions::default();
    let outcome = parse_program_options(env::args_os(), &mut [&mut server, &mut report]);
    let code = match outcome {
        Ok(Outcome::Proceed) => {
            info!(host = %server.host, port = server.port, "options parsed");
            if !report.quiet {
                println!(
                    "{} {}:{} on {} (report level {})",
                    "connecting to".bold(),
                    server.host,
                    server.port,
                    server.venue.literal(),
                    report.log_level.literal(),
                );
            }
            0
        },
        Ok(Outcome::Exit(code)) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            e.exit_code()
        },
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
