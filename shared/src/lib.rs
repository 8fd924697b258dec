//! Types and pure logic shared between the linkshort frontend and backend.

pub mod apirequests;
pub mod config;
pub mod datatypes;
pub mod form;
pub mod validate;
