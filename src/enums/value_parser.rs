use std::ffi::OsStr;
use std::marker::PhantomData;

use clap::{ Arg, ArgAction, Command };
use clap::builder::{ PossibleValue, TypedValueParser };
use clap::error::{ ContextKind, ContextValue, Error as ClapError, ErrorKind };

use crate::enums::{ MaybeFrom, OptionEnum };

/// Converts option values into enumerators of `E` while the command line is parsed.
///
/// A value that names no enumerator fails the parse with [`ErrorKind::InvalidValue`], carrying
/// the option, the offending value and the valid names.
#[derive(Clone)]
pub struct EnumValueParser<E: OptionEnum>(PhantomData<E>);

impl<E: OptionEnum> EnumValueParser<E> {
    pub fn new() -> EnumValueParser<E> {
        EnumValueParser(PhantomData)
    }
}

impl<E: OptionEnum> Default for EnumValueParser<E> {
    fn default() -> EnumValueParser<E> {
        EnumValueParser::new()
    }
}

impl<E: OptionEnum> TypedValueParser for EnumValueParser<E> {
    type Value = E;

    fn parse_ref(&self, cmd: &Command, arg: Option<&Arg>, value: &OsStr) -> Result<E, ClapError> {
        let value = value
            .to_str()
            .ok_or_else(|| ClapError::new(ErrorKind::InvalidUtf8).with_cmd(cmd))?;
        <E as MaybeFrom<str>>::maybe_from(value)
            .ok_or_else(|| invalid_value::<E>(cmd, arg, value))
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(E::names().into_iter().map(PossibleValue::new)))
    }
}

fn invalid_value<E: OptionEnum>(cmd: &Command, arg: Option<&Arg>, value: &str) -> ClapError {
    let arg = arg
        .map(|a| a.to_string())
        .unwrap_or_else(|| String::from("..."));
    let valid = E::names()
        .into_iter()
        .map(String::from)
        .collect();
    let mut err = ClapError::new(ErrorKind::InvalidValue).with_cmd(cmd);
    err.insert(ContextKind::InvalidArg, ContextValue::String(arg));
    err.insert(ContextKind::InvalidValue, ContextValue::String(value.to_string()));
    err.insert(ContextKind::ValidValue, ContextValue::Strings(valid));
    err
}

/// Builds a `--name <VALUE>` option whose value must name an enumerator of `E`.
pub fn enum_arg<E: OptionEnum>(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("VALUE")
        .action(ArgAction::Set)
        .value_parser(EnumValueParser::<E>::new())
}
