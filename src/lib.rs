#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]

pub mod app;
pub mod clustering;
pub mod config;
pub mod error;
pub mod observability;
pub mod output;
pub mod points;
