//! Hermetic conformance run against an in-process service double.
//!
//! Every test starts its own double, so scenarios cannot observe each
//! other's inventory mutations. The full-catalog test additionally
//! replays the serial, shared-inventory shape of a live run.

mod support;

mod auth;
mod creation;
mod full_run;
mod listing;
mod mutation;
