//! Card types.

use core::fmt;

/// Card suit. Suits are cosmetic and never affect scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Single-letter label used by renderers.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the point value of the rank.
    #[must_use]
    pub const fn base_value(self) -> CardValue {
        match self {
            Self::Two => CardValue::Points(2),
            Self::Three => CardValue::Points(3),
            Self::Four => CardValue::Points(4),
            Self::Five => CardValue::Points(5),
            Self::Six => CardValue::Points(6),
            Self::Seven => CardValue::Points(7),
            Self::Eight => CardValue::Points(8),
            Self::Nine => CardValue::Points(9),
            Self::Ten | Self::Jack | Self::Queen | Self::King => CardValue::Points(10),
            Self::Ace => CardValue::Ace,
        }
    }

    /// Short label used by renderers (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

/// Point contribution of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// A fixed number of points.
    Points(u8),
    /// An Ace, worth either [`CardValue::ACE_LOW`] or [`CardValue::ACE_HIGH`].
    Ace,
}

impl CardValue {
    /// Value of an Ace counted low.
    pub const ACE_LOW: u16 = 1;
    /// Value of an Ace counted high.
    pub const ACE_HIGH: u16 = 11;
}

/// A playing card.
///
/// Cards are deliberately not `Copy`: a card lives in exactly one
/// [`Deck`](crate::Deck) at a time and is moved when dealt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    hidden: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            hidden: false,
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the point value of the card.
    #[must_use]
    pub const fn base_value(&self) -> CardValue {
        self.rank.base_value()
    }

    /// Returns whether the card is displayed face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Sets whether the card is displayed face down.
    ///
    /// Concealment only affects rendering; scores always count hidden cards.
    pub const fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Returns whether this card has the given rank and suit, ignoring the
    /// hidden flag.
    #[must_use]
    pub fn is(&self, rank: Rank, suit: Suit) -> bool {
        self.rank == rank && self.suit == suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
