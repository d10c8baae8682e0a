use crate::config::{self};

pub const ROUND_LIMIT: config::RoundLimit = config::RoundLimit::Derived;
pub const RECORD_BRANCHES: bool = true;
pub const TRUTH_TABLE_VARIABLE_LIMIT: config::VariableLimit = 20;
