use std::error::Error as StdError;
use std::fmt::Display;
use std::str::FromStr;
use anyhow::Result;
use clap::ArgMatches;

pub fn opt<T: FromStr>(arg: Option<&str>) -> Result<Option<T>> where T::Err: Display {
    Ok(arg.map(|s| T::from_str(s).map_err(|e| {
        let msg  = format!("invalid argument value '{}': {}", s, e);
        let kind = clap::ErrorKind::InvalidValue;
        clap::Error::with_description(&msg, kind)
    })).transpose()?)
}

// Keeps the typed parse error so callers can tell validation failures apart.
pub fn get<T: FromStr>(args: &ArgMatches, name: &str) -> Result<T> where T::Err: StdError + Send + Sync + 'static {
    let value = args.value_of(name).ok_or_else(|| {
        let msg  = format!("missing argument '{}'", name);
        let kind = clap::ErrorKind::MissingRequiredArgument;
        clap::Error::with_description(&msg, kind)
    })?;
    Ok(T::from_str(value)?)
}

pub fn all<T: FromStr>(args: &ArgMatches, name: &str) -> Result<Vec<T>> where T::Err: StdError + Send + Sync + 'static {
    let values = args.values_of(name).map(|vs| vs.collect::<Vec<_>>()).unwrap_or_default();
    Ok(values.into_iter().map(T::from_str).collect::<Result<_, _>>()?)
}
