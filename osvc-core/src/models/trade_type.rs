use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Craft,
    Agricultural,
    Free,
    Other,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Craft => "craft",
            Self::Agricultural => "agricultural",
            Self::Free => "free",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "craft" => Some(Self::Craft),
            "agricultural" => Some(Self::Agricultural),
            "free" => Some(Self::Free),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}
