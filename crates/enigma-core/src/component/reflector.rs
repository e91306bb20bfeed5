// crates/enigma-core/src/component/reflector.rs

use crate::alphabet::Alphabet;
use crate::component::SignalComponent;
use crate::error::Result;
use crate::wiring::Wiring;

/// Fixed turnaround stage. Never rotates.
///
/// Historical reflectors pair symbols (no symbol maps to itself, wiring is
/// its own inverse). That is reported by [`Reflector::is_reciprocal`] but
/// not required.
#[derive(Clone, Debug)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    pub fn new(alphabet: &Alphabet, map: &str) -> Result<Self> {
        Ok(Self {
            wiring: Wiring::new(alphabet, map)?,
        })
    }

    pub fn size(&self) -> usize {
        self.wiring.len()
    }

    pub fn is_reciprocal(&self) -> bool {
        self.wiring.is_fixed_point_free_involution()
    }
}

impl SignalComponent for Reflector {
    #[inline]
    fn process_forward(&self, index: usize) -> usize {
        self.wiring.map(index)
    }

    #[inline]
    fn process_backward(&self, index: usize) -> usize {
        self.wiring.unmap(index)
    }

    fn reflects(&self) -> bool {
        true
    }
}
