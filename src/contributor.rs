//! Pieces of an executable that bring their own command line options.

use clap::{ ArgMatches, Args, Command, FromArgMatches };

use crate::error::{ Result, OptionsError };

/// Something that owns a set of related options and the storage they are parsed into.
///
/// Registration and the commit of parsed values are two separate steps: every contributor
/// registers into the same [`Command`] before anything is parsed, and values are only handed
/// back through [`OptionContributor::notify`] once the whole command line was accepted.
///
/// Types deriving [`clap::Args`] are contributors already. Hand written contributors look like
/// this:
///
/// ```rust
/// struct Verbosity {
///     verbose: bool,
/// }
///
/// impl OptionContributor for Verbosity {
///     fn add_options(&self, cmd: Command) -> Command {
///         cmd.arg(Arg::new("verbose").long("verbose").action(ArgAction::SetTrue))
///     }
///
///     fn notify(&mut self, matches: &ArgMatches) -> Result {
///         self.verbose = matches.get_flag("verbose");
///         Ok(())
///     }
/// }
/// ```
pub trait OptionContributor {
    /// Registers this contributor's options.
    fn add_options(&self, cmd: Command) -> Command;

    /// Commits parsed values into this contributor's storage.
    fn notify(&mut self, matches: &ArgMatches) -> Result;
}

impl<T: Args> OptionContributor for T {
    fn add_options(&self, cmd: Command) -> Command {
        T::augment_args(cmd)
    }

    fn notify(&mut self, matches: &ArgMatches) -> Result {
        FromArgMatches::update_from_arg_matches(self, matches)
            .map_err(|e| Box::new(OptionsError::from(e)))
    }
}
