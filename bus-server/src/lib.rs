//! Bus route finder server.
//!
//! A web application that answers: "Which buses stop here, and where
//! else do they go?" Route and stop data comes from a spreadsheet loaded
//! once at startup.

pub mod config;
pub mod domain;
pub mod table;
pub mod web;
