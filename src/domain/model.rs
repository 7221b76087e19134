use crate::domain::optional::OptionalValue;
use serde::{Deserialize, Serialize};

/// 一個章節執行後輸出的文字行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub section: String,
    pub lines: Vec<String>,
}

impl Transcript {
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            lines: Vec::new(),
        }
    }

    pub fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!("[{}] {}", self.section, line);
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn raw_value(self) -> u8 {
        self as u8
    }

    /// 沒有對應的 rank 時回傳 None
    pub fn from_raw(raw: u8) -> OptionalValue<Rank> {
        Rank::ALL
            .iter()
            .copied()
            .find(|rank| rank.raw_value() == raw)
            .into()
    }

    pub fn simple_description(self) -> String {
        match self {
            Rank::Ace => "ace".to_string(),
            Rank::Jack => "jack".to_string(),
            Rank::Queen => "queen".to_string(),
            Rank::King => "king".to_string(),
            other => other.raw_value().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn simple_description(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }
}

/// 值語意：傳遞時總是複製
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn simple_description(&self) -> String {
        format!(
            "The {} of {}",
            self.rank.simple_description(),
            self.suit.simple_description()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerResponse {
    Result { sunrise: String, sunset: String },
    Failure(String),
}

impl ServerResponse {
    pub fn describe(&self) -> String {
        match self {
            ServerResponse::Result { sunrise, sunset } => {
                format!("Sunrise is at {} and sunset is at {}.", sunrise, sunset)
            }
            ServerResponse::Failure(message) => format!("Failure... {}", message),
        }
    }
}
