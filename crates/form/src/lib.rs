//! Quote form flow: step gating and the step-1 → step-2 transition.

pub mod config;
pub mod progress;
pub mod transition;

pub use config::FormConfig;
pub use progress::{
    field_value, FormGates, FormProgressGate, FormProgressState, LocationFields, SELECTION_NULL,
};
pub use transition::{FormStep, PendingTransition, StepTransition, StepView, TransitionCompleted};
