//! Caller side of occurrence expansion: turns the rows a calendar view
//! returns into events, expands them and hands back calendar items.

pub mod calendar;
pub mod error;
