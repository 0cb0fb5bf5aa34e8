//! Lazy Cartesian product of the policy alphabet.

use crate::mask::{CharClass, Mask};

const ALPHABET: [CharClass; 4] = CharClass::POLICY_ALPHABET;

/// Every mask of one length over `?d ?l ?u ?s`, produced one at a time.
///
/// The last position varies fastest, so for length 2 the order is
/// `?d?d ?d?l ?d?u ?d?s ?l?d ...`. Nothing beyond the current mask is held
/// in memory.
#[derive(Debug, Clone)]
pub struct MaskProduct {
    indices: Vec<u8>,
    current: Vec<CharClass>,
    started: bool,
    exhausted: bool,
}

impl MaskProduct {
    pub fn new(length: usize) -> Self {
        Self {
            indices: vec![0; length],
            current: vec![ALPHABET[0]; length],
            started: false,
            exhausted: false,
        }
    }

    pub fn length(&self) -> usize {
        self.indices.len()
    }

    /// Number of masks a full pass yields: `4^length`.
    pub fn total(&self) -> u128 {
        (ALPHABET.len() as u128).pow(self.indices.len() as u32)
    }

    /// Rewind to the first mask.
    pub fn reset(&mut self) {
        self.indices.fill(0);
        self.current.fill(ALPHABET[0]);
        self.started = false;
        self.exhausted = false;
    }

    /// Step to the next mask and borrow it, without allocating.
    pub fn advance(&mut self) -> Option<&[CharClass]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.current);
        }

        let mut pos = self.indices.len();
        loop {
            if pos == 0 {
                self.exhausted = true;
                return None;
            }
            pos -= 1;
            self.indices[pos] += 1;
            match ALPHABET.get(self.indices[pos] as usize) {
                Some(&class) => {
                    self.current[pos] = class;
                    break;
                }
                None => {
                    self.indices[pos] = 0;
                    self.current[pos] = ALPHABET[0];
                }
            }
        }
        Some(&self.current)
    }
}

impl Iterator for MaskProduct {
    type Item = Mask;

    fn next(&mut self) -> Option<Mask> {
        self.advance().map(|classes| Mask::from_classes(classes.to_vec()))
    }
}
