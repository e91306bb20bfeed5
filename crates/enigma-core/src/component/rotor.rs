// crates/enigma-core/src/component/rotor.rs

use crate::alphabet::Alphabet;
use crate::component::SignalComponent;
use crate::error::{EnigmaError, Result};
use crate::wiring::Wiring;

/// Stepping substitution stage.
///
/// The wiring is fixed; the whole rotor turns by `offset` positions relative
/// to the stages around it. Both passes shift the incoming contact by the
/// offset, go through the wiring, and shift back.
#[derive(Clone, Debug)]
pub struct Rotor {
    wiring: Wiring,
    notch: usize,
    offset: usize,
}

impl Rotor {
    pub fn new(alphabet: &Alphabet, map: &str, notch: char) -> Result<Self> {
        let wiring = Wiring::new(alphabet, map)?;
        let notch = alphabet
            .index_of(notch)
            .map_err(|_| EnigmaError::InvalidNotch(notch))?;
        Ok(Self {
            wiring,
            notch,
            offset: 0,
        })
    }

    /// Start the rotor with `position` showing in the window.
    pub fn at_position(mut self, alphabet: &Alphabet, position: char) -> Result<Self> {
        self.offset = alphabet
            .index_of(position)
            .map_err(|_| EnigmaError::InvalidPosition(position))?;
        Ok(self)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.wiring.len()
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn notch(&self) -> usize {
        self.notch
    }

    /// Carry handed to the next rotor when this one advances `steps` from
    /// its current offset: one for reaching past the notch, plus one per
    /// further full cycle of the alphabet.
    pub fn count_notch_revs(&self, steps: usize) -> usize {
        let n = self.size();
        let (nch, off) = (self.notch, self.offset);

        // Past the notch and not enough steps to wrap around to it.
        if off > nch && steps < nch + (n - off) {
            return 0;
        }

        let adjusted = steps as i128 - (nch as i128 - off as i128);
        let crossed = i128::from(adjusted > 0);
        let revs = crossed + adjusted.div_euclid(n as i128);
        usize::try_from(revs.max(0)).unwrap_or(usize::MAX)
    }
}

impl SignalComponent for Rotor {
    fn process_forward(&self, index: usize) -> usize {
        let n = self.size();
        let shifted = (index + self.offset) % n;
        (self.wiring.map(shifted) + n - self.offset) % n
    }

    fn process_backward(&self, index: usize) -> usize {
        let n = self.size();
        let shifted = (index + self.offset) % n;
        (self.wiring.unmap(shifted) + n - self.offset) % n
    }

    fn step(&mut self, steps: usize) -> usize {
        let n = self.size();
        let revs = self.count_notch_revs(steps);
        self.offset = (self.offset + steps % n) % n;
        revs
    }
}
