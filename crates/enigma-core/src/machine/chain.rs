// crates/enigma-core/src/machine/chain.rs

use crate::component::{Component, Rotor, SignalComponent};
use crate::error::{EnigmaError, Result};

/// Ordered signal path: `[Plugboard, fastest rotor, .., slowest rotor, Reflector]`.
///
/// The chain owns every stage and is the only thing that steps them.
#[derive(Clone, Debug)]
pub struct SignalChain {
    components: Vec<Component>,
}

impl SignalChain {
    pub fn new(components: Vec<Component>) -> Result<Self> {
        validate_chain(&components)?;
        Ok(Self { components })
    }

    /// Adds rotors on the slow end of the stack, just before the reflector.
    /// On error the chain is left as it was.
    pub fn connect(&mut self, components: Vec<Component>) -> Result<()> {
        if let Some(c) = components.iter().find(|c| c.as_rotor().is_none()) {
            return Err(EnigmaError::MalformedChain(format!(
                "only rotors can be connected, got a {}",
                c.kind()
            )));
        }
        let size = self.size();
        if let Some(c) = components.iter().find(|c| c.size() != size) {
            return Err(EnigmaError::MalformedChain(format!(
                "connected {} has {} contacts, chain has {size}",
                c.kind(),
                c.size()
            )));
        }

        let at = self.components.len() - 1;
        self.components.splice(at..at, components);
        Ok(())
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Contacts per stage (the alphabet size).
    pub fn size(&self) -> usize {
        self.components[0].size()
    }

    pub fn rotor_count(&self) -> usize {
        self.rotors().count()
    }

    /// Rotor offsets in chain order, fastest first.
    pub fn offsets(&self) -> Vec<usize> {
        self.rotors().map(|r| r.offset()).collect()
    }

    fn rotors(&self) -> impl Iterator<Item = &Rotor> {
        self.components.iter().filter_map(Component::as_rotor)
    }

    /// Odometer advance. Each stage hands its carry to the next; once a stage
    /// hands on nothing, nothing further along can move.
    pub fn step(&mut self, steps: usize) {
        let mut steps = steps;
        for comp in self.components.iter_mut() {
            if steps == 0 {
                break;
            }
            steps = comp.step(steps);
        }
    }

    /// Runs one index through the path without stepping.
    pub fn transform(&self, index: usize) -> usize {
        let mut idx = index;
        let mut turn = None;
        for (i, comp) in self.components.iter().enumerate() {
            idx = comp.process_forward(idx);
            if comp.reflects() {
                turn = Some(i);
                break;
            }
        }

        if let Some(turn) = turn {
            for comp in self.components[..turn].iter().rev() {
                idx = comp.process_backward(idx);
            }
        }
        idx
    }

    /// Steps once, then transforms. The fast rotor always moves before the
    /// symbol is enciphered.
    pub fn encrypt_index(&mut self, index: usize) -> usize {
        self.step(1);
        self.transform(index)
    }
}

fn validate_chain(components: &[Component]) -> Result<()> {
    let (first, last) = match (components.first(), components.last()) {
        (Some(f), Some(l)) if components.len() >= 3 => (f, l),
        _ => {
            return Err(EnigmaError::MalformedChain(format!(
                "need a plugboard, at least one rotor and a reflector, got {} stages",
                components.len()
            )))
        }
    };

    if !matches!(first, Component::Plugboard(_)) {
        return Err(EnigmaError::MalformedChain(format!(
            "first stage must be the plugboard, got a {}",
            first.kind()
        )));
    }
    if !matches!(last, Component::Reflector(_)) {
        return Err(EnigmaError::MalformedChain(format!(
            "last stage must be the reflector, got a {}",
            last.kind()
        )));
    }
    let inner = &components[1..components.len() - 1];
    if let Some(c) = inner.iter().find(|c| c.as_rotor().is_none()) {
        return Err(EnigmaError::MalformedChain(format!(
            "unexpected {} between plugboard and reflector",
            c.kind()
        )));
    }

    let size = first.size();
    if let Some(c) = components.iter().find(|c| c.size() != size) {
        return Err(EnigmaError::MalformedChain(format!(
            "{} has {} contacts, plugboard has {size}",
            c.kind(),
            c.size()
        )));
    }

    Ok(())
}
