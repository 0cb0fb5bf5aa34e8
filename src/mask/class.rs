//! Character classes addressable from a mask.

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const PRINTABLE: &str = " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// One position of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Special,
    All,
}

impl CharClass {
    /// Alphabet walked by the policy enumerator, in emission order.
    pub const POLICY_ALPHABET: [CharClass; 4] = [
        CharClass::Digit,
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Special,
    ];

    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'l' => Some(CharClass::Lower),
            b'u' => Some(CharClass::Upper),
            b'd' => Some(CharClass::Digit),
            b's' => Some(CharClass::Special),
            b'a' => Some(CharClass::All),
            _ => None,
        }
    }

    /// Mask notation for this class, e.g. `?l`.
    pub const fn token(self) -> &'static str {
        match self {
            CharClass::Lower => "?l",
            CharClass::Upper => "?u",
            CharClass::Digit => "?d",
            CharClass::Special => "?s",
            CharClass::All => "?a",
        }
    }

    /// The characters a cracker substitutes for this position.
    pub const fn charset(self) -> &'static str {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
            CharClass::All => PRINTABLE,
        }
    }

    #[inline]
    pub const fn cardinality(self) -> u128 {
        self.charset().len() as u128
    }
}

/// Number of positions of each class in a mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub lower: usize,
    pub upper: usize,
    pub digit: usize,
    pub special: usize,
    pub all: usize,
}

impl ClassCounts {
    #[inline]
    pub fn add(&mut self, class: CharClass) {
        match class {
            CharClass::Lower => self.lower += 1,
            CharClass::Upper => self.upper += 1,
            CharClass::Digit => self.digit += 1,
            CharClass::Special => self.special += 1,
            CharClass::All => self.all += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.lower + self.upper + self.digit + self.special + self.all
    }
}

impl FromIterator<CharClass> for ClassCounts {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut counts = ClassCounts::default();
        for class in iter {
            counts.add(class);
        }
        counts
    }
}
