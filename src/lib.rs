//! Serializers for calls-for-service records.
//!
//! This crate turns persisted records (calls, incidents, cities, call units, users and groups)
//! into ordered JSON mappings for the HTTP API. Each entity has a fixed list of field
//! descriptors; a serializer walks that list, fetches every attribute from the record, converts
//! it into a JSON primitive and, in compact mode, drops fields without informative value.

#![warn(missing_docs)]

extern crate chrono;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate failure;
#[cfg_attr(test, macro_use)]
extern crate serde_json;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[cfg(test)]
extern crate difference;

#[macro_use]
mod macros;

pub use {
    common::*,
    config::*,
    entities::*,
    error::*,
    field::*,
    models::*,
    record::*,
    serializer::*,
};

mod common;
mod config;
mod entities;
mod error;
mod field;
mod models;
mod record;
mod serializer;

#[cfg(test)]
mod tests;
