/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, though no log implementation is provided.
The binary configures one (through log4rs) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [parser](crate::parser)
    pub const PARSE: &str = "parse";

    /// Logs related to [sign normalization](crate::procedures::normalize)
    pub const NORMALIZE: &str = "normalize";

    /// Logs related to individual [rule applications](crate::procedures::expand)
    pub const EXPANSION: &str = "expansion";

    /// Logs related to [growth rounds](crate::procedures::grow)
    pub const GROWTH: &str = "growth";

    /// Logs related to [branch closure](crate::procedures::closure)
    pub const CLOSURE: &str = "closure";

    /// Logs related to the [truth table](crate::procedures::truth_table) method
    pub const TRUTH_TABLE: &str = "truth_table";
}
