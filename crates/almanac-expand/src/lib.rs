//! Splits a single resolved calendar event into per-day occurrences.
//!
//! The entry point is [`expand::OccurrenceExpander`]: give it an
//! [`expand::Event`] and something that can translate instants to local wall
//! clock time (any `chrono::TimeZone`, usually a `chrono_tz::Tz` obtained from
//! [`expand::TimeZoneResolver`]) and it returns one [`expand::Occurrence`] per
//! local calendar day the event touches.

pub mod error;
pub mod expand;
