//! Collection, formatting and delivery of the daily traffic report.
//!
//! * [`system`] and [`vnstat`] implement the capability traits of
//!   `netreport_common::system` against the local machine.
//! * [`collector`] turns raw capability answers into report facts, degrading
//!   failures the way the report expects.
//! * [`report`] renders the message, [`mail`] delivers it over SMTP.
//! * [`pipeline`] runs the stages in order.

pub mod collector;
pub mod command;
pub mod mail;
pub mod pipeline;
pub mod report;
pub mod system;
pub mod vnstat;
