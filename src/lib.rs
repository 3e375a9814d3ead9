//! Table Processor - CSV Table Processing & Calculator
//!
//! Loads a two-column `key,value` CSV file, shows it as a table, derives a
//! few fixed values from it and offers a two-operand calculator.

pub mod calc;
pub mod config;
pub mod data;
pub mod gui;
