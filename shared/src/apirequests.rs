//! The datatypes that travel between the form and the server functions.
pub mod links;
