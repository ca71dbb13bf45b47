//! Shared test harness modules for the vibe CLI.

use super::*;

mod helpers;
mod query_unit;
