// crates/enigma-core/src/component/mod.rs

pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;

/// One stage of the signal path.
///
/// Every stage maps a symbol index on the way in (`process_forward`) and on
/// the way back out (`process_backward`). For a fixed internal state the two
/// passes are inverses of each other.
pub trait SignalComponent {
    fn process_forward(&self, index: usize) -> usize;

    fn process_backward(&self, index: usize) -> usize;

    /// Advance by `steps` and return how many steps the next stage receives.
    /// Stages that never rotate pass `steps` through unchanged.
    fn step(&mut self, steps: usize) -> usize {
        steps
    }

    /// The signal turns around after this stage.
    fn reflects(&self) -> bool {
        false
    }
}

/// Closed set of stages a chain is assembled from.
#[derive(Clone, Debug)]
pub enum Component {
    Plugboard(Plugboard),
    Rotor(Rotor),
    Reflector(Reflector),
}

impl Component {
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Plugboard(_) => "plugboard",
            Component::Rotor(_) => "rotor",
            Component::Reflector(_) => "reflector",
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Component::Plugboard(p) => p.size(),
            Component::Rotor(r) => r.size(),
            Component::Reflector(r) => r.size(),
        }
    }

    pub fn as_rotor(&self) -> Option<&Rotor> {
        match self {
            Component::Rotor(r) => Some(r),
            _ => None,
        }
    }
}

impl SignalComponent for Component {
    fn process_forward(&self, index: usize) -> usize {
        match self {
            Component::Plugboard(p) => p.process_forward(index),
            Component::Rotor(r) => r.process_forward(index),
            Component::Reflector(r) => r.process_forward(index),
        }
    }

    fn process_backward(&self, index: usize) -> usize {
        match self {
            Component::Plugboard(p) => p.process_backward(index),
            Component::Rotor(r) => r.process_backward(index),
            Component::Reflector(r) => r.process_backward(index),
        }
    }

    fn step(&mut self, steps: usize) -> usize {
        match self {
            Component::Plugboard(p) => p.step(steps),
            Component::Rotor(r) => r.step(steps),
            Component::Reflector(r) => r.step(steps),
        }
    }

    fn reflects(&self) -> bool {
        match self {
            Component::Plugboard(p) => p.reflects(),
            Component::Rotor(r) => r.reflects(),
            Component::Reflector(r) => r.reflects(),
        }
    }
}

impl From<Plugboard> for Component {
    fn from(p: Plugboard) -> Self {
        Component::Plugboard(p)
    }
}

impl From<Rotor> for Component {
    fn from(r: Rotor) -> Self {
        Component::Rotor(r)
    }
}

impl From<Reflector> for Component {
    fn from(r: Reflector) -> Self {
        Component::Reflector(r)
    }
}
