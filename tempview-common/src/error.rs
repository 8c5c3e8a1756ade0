//! Fault classification and recovery policy.
//!
//! The driver loop never improvises on errors: every fault kind maps
//! through one total table to the action the loop takes. Hardware that is
//! absent at startup cannot self-heal, so init faults halt in a passive
//! wait. Steady-state faults are transient bus or panel glitches; the loop
//! logs them, backs off and tries again next cycle, leaving the on-screen
//! state untouched until a cycle succeeds.

/// Where a failure occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// Bus, sensor or display initialization failed at startup.
    HardwareInit,
    /// Sensor conversion or read failed during the steady-state loop.
    SensorRead,
    /// Display rejected a write during rendering.
    DisplayWrite,
}

/// What the driver loop does about a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Stop cycling and wait passively; the fault cannot clear on its own.
    Halt,
    /// Log, wait [`crate::config::ERROR_BACKOFF_MS`], run the next cycle.
    RetryAfterBackoff,
}

/// The recovery policy, total over [`Fault`].
pub const fn action_for(fault: Fault) -> Action {
    match fault {
        Fault::HardwareInit => Action::Halt,
        Fault::SensorRead | Fault::DisplayWrite => Action::RetryAfterBackoff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_faults_are_fatal() {
        assert_eq!(action_for(Fault::HardwareInit), Action::Halt);
    }

    #[test]
    fn test_steady_state_faults_recover() {
        assert_eq!(action_for(Fault::SensorRead), Action::RetryAfterBackoff);
        assert_eq!(action_for(Fault::DisplayWrite), Action::RetryAfterBackoff);
    }
}
