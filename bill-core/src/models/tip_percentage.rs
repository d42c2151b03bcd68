use serde::{Deserialize, Serialize};

use crate::calculations::CalculationError;

/// Tip percentages offered by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TipPercentage {
    Ten,
    Fifteen,
    Twenty,
    #[default]
    TwentyFive,
    None,
}

impl TipPercentage {
    /// All choices in picker order.
    pub fn all() -> &'static [TipPercentage] {
        &[
            TipPercentage::Ten,
            TipPercentage::Fifteen,
            TipPercentage::Twenty,
            TipPercentage::TwentyFive,
            TipPercentage::None,
        ]
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
            Self::TwentyFive => 25,
            Self::None => 0,
        }
    }

    pub fn parse(value: u8) -> Option<Self> {
        match value {
            10 => Some(Self::Ten),
            15 => Some(Self::Fifteen),
            20 => Some(Self::Twenty),
            25 => Some(Self::TwentyFive),
            0 => Some(Self::None),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        format!("{}%", self.as_u8())
    }
}

impl TryFrom<u8> for TipPercentage {
    type Error = CalculationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::parse(value).ok_or(CalculationError::UnsupportedTipPercentage(value))
    }
}

impl From<TipPercentage> for u8 {
    fn from(tip: TipPercentage) -> Self {
        tip.as_u8()
    }
}
