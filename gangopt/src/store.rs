//! Ready-made setters writing into fields of the record.
//!
//! Each helper takes an accessor closure returning the field and produces a
//! setter usable with [`Opt`](crate::Opt) constructors or positional slots.

use std::fmt::Display;
use std::str::FromStr;

use crate::option::SetResult;

/// Sets a `bool` field to true, ignoring the value.
pub fn flag<R, F>(field: F) -> impl Fn(&mut R, &str) -> SetResult + Send + Sync
where
    F: Fn(&mut R) -> &mut bool + Send + Sync,
{
    move |record: &mut R, _value: &str| -> SetResult {
        *field(record) = true;
        Ok(())
    }
}

/// Increments a counter field once per occurrence.
pub fn count<R, F>(field: F) -> impl Fn(&mut R, &str) -> SetResult + Send + Sync
where
    F: Fn(&mut R) -> &mut u32 + Send + Sync,
{
    move |record: &mut R, _value: &str| -> SetResult {
        let n = field(record);
        *n = n.saturating_add(1);
        Ok(())
    }
}

/// Parses the value with `FromStr` and stores it, replacing the old value.
pub fn parse<R, T, F>(field: F) -> impl Fn(&mut R, &str) -> SetResult + Send + Sync
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&mut R) -> &mut T + Send + Sync,
{
    move |record: &mut R, value: &str| -> SetResult {
        *field(record) = value.parse().map_err(|e: T::Err| e.to_string())?;
        Ok(())
    }
}

/// Parses the value with `FromStr` and appends it.
pub fn push<R, T, F>(field: F) -> impl Fn(&mut R, &str) -> SetResult + Send + Sync
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&mut R) -> &mut Vec<T> + Send + Sync,
{
    move |record: &mut R, value: &str| -> SetResult {
        let v = value.parse().map_err(|e: T::Err| e.to_string())?;
        field(record).push(v);
        Ok(())
    }
}
