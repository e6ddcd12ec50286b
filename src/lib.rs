//! Declares and parses the command line options of an executable whose pieces each bring
//! their own options.
pub mod args;
pub mod contributor;
pub mod enums;
pub mod error;
pub mod logging;

pub use args::{ Outcome, EXIT_FAILURE, parse_program_options, parse_program_options_to, program_name };
pub use contributor::OptionContributor;
pub use enums::{ EnumValueParser, Literal, MaybeFrom, OptionEnum, enum_arg };
pub use error::{ OptionsError, Result };
