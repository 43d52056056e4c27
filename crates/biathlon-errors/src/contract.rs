//! Contract violations between processing stages.
//!
//! These indicate an ill-formed event stream handed over by an upstream
//! stage. They are reported, never repaired.

/// Event stream contract violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// A competitor's result was requested for zero events
    #[error("competitor({competitor}) has no events")]
    EmptyEventSequence {
        /// Competitor id
        competitor: u32,
    },

    /// The last event of a competitor is not finished or disqualified
    #[error("competitor({competitor}) has no terminal event")]
    MissingTerminalMarker {
        /// Competitor id
        competitor: u32,
    },

    /// An event of one competitor was handed to another competitor's fold
    #[error("event of competitor({found}) passed to competitor({expected})")]
    ForeignEvent {
        /// Competitor being computed
        expected: u32,
        /// Competitor the event belongs to
        found: u32,
    },
}
