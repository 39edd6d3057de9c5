//! Shared test harness modules for the Waybill CLI.

use super::*;

mod helpers;
