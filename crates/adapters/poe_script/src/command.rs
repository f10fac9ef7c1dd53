//! Argument conventions of the PoE script.
//!
//! | Command | Argv |
//! |---------|------|
//! | list all ports | `-c` |
//! | query one port | `-c -p <id>` |
//! | power on | `-u -p <id>` |
//! | power off | `-d -p <id>` |

use poegate_domain::id::DeviceId;
use poegate_domain::power::PowerState;

/// One invocation of the PoE script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCommand {
    List,
    Query(DeviceId),
    PowerOn(DeviceId),
    PowerOff(DeviceId),
}

impl ToolCommand {
    /// The command that switches `id` to `state`.
    #[must_use]
    pub fn set_power(id: DeviceId, state: PowerState) -> Self {
        match state {
            PowerState::On => Self::PowerOn(id),
            PowerState::Off => Self::PowerOff(id),
        }
    }

    /// Render the command-line flags.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::List => vec!["-c".to_string()],
            Self::Query(id) => port_args("-c", *id),
            Self::PowerOn(id) => port_args("-u", *id),
            Self::PowerOff(id) => port_args("-d", *id),
        }
    }
}

fn port_args(flag: &str, id: DeviceId) -> Vec<String> {
    vec![flag.to_string(), "-p".to_string(), id.to_string()]
}
