//! Rotor cipher machine core.
//!
//! A symbol index travels forward through the plugboard and the rotor stack
//! (fastest rotor first), turns around at the reflector and comes back out
//! through the same stages in reverse. The fast rotor steps before every
//! symbol; rotors carry into their slower neighbour when they leave their
//! notch position.
//!
//! ```
//! use enigma_core::{encrypt, settings::defaults::default_settings};
//!
//! let settings = default_settings();
//! let sent = encrypt(&settings, "Hello").unwrap();
//! assert_eq!(sent.input, "HELLO");
//!
//! let received = encrypt(&settings, &sent.output).unwrap();
//! assert_eq!(received.output, "HELLO");
//! ```

pub mod error;

pub mod alphabet;
pub mod component;
pub mod machine;
pub mod settings;
pub mod wiring;

pub use crate::alphabet::Alphabet;
pub use crate::component::{Component, Plugboard, Reflector, Rotor, SignalComponent};
pub use crate::error::{EnigmaError, Result};
pub use crate::machine::chain::SignalChain;
pub use crate::machine::engine::{encrypt, EncryptionResult, Engine};
pub use crate::settings::settings::EncryptionSettings;
pub use crate::wiring::Wiring;
