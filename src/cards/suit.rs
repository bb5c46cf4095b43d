/// Card suit: clubs, diamonds, hearts, spades.
///
/// The discriminant order (C < D < H < S) fixes card indices. The suit grid
/// uses the display order of [`Suit::display`] instead, spades first.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    pub const MAX: Self = Suit::S;
    pub const MIN: Self = Suit::C;

    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// All four suits in suit-grid order.
    pub const fn display() -> [Suit; 4] {
        [Suit::S, Suit::H, Suit::D, Suit::C]
    }
    /// Unicode suit symbol for display.
    pub fn ascii(&self) -> char {
        match self {
            Suit::C => '♣',
            Suit::D => '♦',
            Suit::H => '♥',
            Suit::S => '♠',
        }
    }
    /// Four-colour deck display color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Suit::C => "#2e7d32",
            Suit::D => "#1565c0",
            Suit::H => "#c62828",
            Suit::S => "#212121",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism
impl TryFrom<char> for Suit {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::C),
            'd' | '♦' => Ok(Suit::D),
            'h' | '♥' => Ok(Suit::H),
            's' | '♠' => Ok(Suit::S),
            _ => Err(c),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::D;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn bijective_char() {
        for suit in Suit::all() {
            let c = suit.to_string().chars().next().unwrap();
            assert_eq!(Suit::try_from(c), Ok(suit));
            assert_eq!(Suit::try_from(suit.ascii()), Ok(suit));
        }
        assert_eq!(Suit::try_from('x'), Err('x'));
    }

    #[test]
    fn display_order_is_permutation() {
        let mut order = Suit::display();
        order.sort();
        assert_eq!(order, Suit::all());
    }
}
