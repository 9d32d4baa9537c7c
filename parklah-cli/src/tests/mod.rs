//! Shared test harness modules for the `ParkLah` CLI.

use super::*;

mod catalogue_unit;
mod helpers;
