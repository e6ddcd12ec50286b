//! Helpers for parsing command line arguments.

use std::ffi::{ OsStr, OsString };
use std::io::{ self, Write };
use std::path::Path;

use clap::{ Arg, ArgAction, Command, crate_name };
use clap::error::ErrorKind;
use tracing::{ debug, error };

use crate::contributor::OptionContributor;
use crate::error::{ Result, OptionsError };
use crate::logging;

/// Exit code returned when the caller should stop right after parsing.
pub const EXIT_FAILURE: i32 = 1;

/// What the caller should do once the command line was parsed.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    /// Every contributor holds its parsed or default values.
    Proceed,
    /// Exit immediately with this code without looking at any option value.
    Exit(i32),
}

impl Outcome {
    pub fn exit_code(&self) -> Option<i32> {
        match *self {
            Outcome::Proceed => None,
            Outcome::Exit(code) => Some(code),
        }
    }
}

/// Gets the name shown in the help banner from the invocation path.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|path| Path::new(path).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(crate_name!()))
}

/// Parses command line arguments using the [`clap`](https://docs.rs/clap/latest/clap/) crate,
/// printing the help message to standard output when it is requested.
///
/// Installs the [`logging`](crate::logging) subscriber first unless one is already set, so a
/// missing required option is always reported on standard error.
///
/// See [`parse_program_options_to`].
pub fn parse_program_options<I, T>(
    args: I,
    contributors: &mut [&mut dyn OptionContributor],
) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    logging::init();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    parse_program_options_to(args, contributors, &mut out)
}

/// Collects the options of every contributor, in order, and parses `args` against them.
///
/// `args` starts with the invocation path. The whole of `args` is parsed first: an unknown
/// option or a value that doesn't fit its option is returned as an error untouched, wherever
/// `--help` appears. After that the outcome is [`Outcome::Exit`] with [`EXIT_FAILURE`] when
/// `--help` was given (the help message is written to `out`, even if required options are
/// missing) or when a required option is missing. Otherwise parsed values are committed into
/// every contributor and the outcome is [`Outcome::Proceed`].
///
/// The missing option is reported through `tracing` at `error` level and is only visible
/// with a subscriber installed, e.g. by [`logging::init`].
pub fn parse_program_options_to<I, T, W>(
    args: I,
    contributors: &mut [&mut dyn OptionContributor],
    out: &mut W,
) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let name = program_name(args.first().map(OsString::as_os_str));
    let mut cmd = contributors
        .iter()
        .fold(registry(name), |cmd, contributor| contributor.add_options(cmd));
    debug!(
        options = cmd.get_arguments().count(),
        contributors = contributors.len(),
        "registered program options",
    );

    let matches = match cmd.clone().try_get_matches_from(args.clone()) {
        Ok(matches) => matches,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            if help_requested(&cmd, args) {
                return print_help(&mut cmd, out);
            }
            error!("{}", e.to_string().trim_end());
            return Ok(Outcome::Exit(EXIT_FAILURE));
        },
        Err(e) => return Err(Box::new(OptionsError::from(e))),
    };

    if matches.get_flag("help") {
        return print_help(&mut cmd, out);
    }

    for contributor in contributors.iter_mut() {
        contributor.notify(&matches)?;
    }
    debug!("program options committed");
    Ok(Outcome::Proceed)
}

/// Whether `--help` is among `args` once no option is required anymore.
fn help_requested(cmd: &Command, args: Vec<OsString>) -> bool {
    let ids: Vec<String> = cmd
        .get_arguments()
        .map(|a| a.get_id().as_str().to_owned())
        .collect();
    ids.iter()
        .fold(cmd.clone(), |cmd, id| cmd.mut_arg(id, |a| a.required(false)))
        .try_get_matches_from(args)
        .map(|matches| matches.get_flag("help"))
        .unwrap_or(false)
}

fn print_help<W: Write>(cmd: &mut Command, out: &mut W) -> Result<Outcome> {
    writeln!(out, "{}", cmd.render_help())
        .map_err(|e| Box::new(OptionsError::from(e)))?;
    Ok(Outcome::Exit(EXIT_FAILURE))
}

/// A fresh registry holding only the built-in `--help` flag.
fn registry(name: String) -> Command {
    Command::new(name)
        .help_template("{name}\n\nUsage: {usage}\n\n{all-args}")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(Arg::new("help")
             .long("help")
             .help("produce help message")
             .action(ArgAction::SetTrue)
        )
}
