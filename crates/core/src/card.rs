//! Card data returned by the card-data service
//!
//! Field names follow Scryfall's card object so records can be deserialized
//! directly from the `/cards/named` response and handed to callers unchanged.

use serde::{Deserialize, Serialize};

/// Scryfall card object, reduced to the fields surveil consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scryfall_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<Prices>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_uris: Option<PurchaseUris>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageUris>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_faces: Option<Vec<CardFace>>,
}

/// Prices are decimal strings, or null when the card has no market price
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    pub usd: Option<String>,
    #[serde(default)]
    pub usd_foil: Option<String>,
    #[serde(default)]
    pub usd_etched: Option<String>,
    #[serde(default)]
    pub eur: Option<String>,
    #[serde(default)]
    pub eur_foil: Option<String>,
    #[serde(default)]
    pub tix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcgplayer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardmarket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardhoarder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art_crop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_crop: Option<String>,
}

impl ImageUris {
    /// Normal-size image, falling back to the small one
    pub fn preferred(&self) -> Option<&str> {
        self.normal.as_deref().or(self.small.as_deref())
    }
}

/// One face of a multi-faced card (transform, modal DFC, split, adventure)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageUris>,
}

impl CardRecord {
    fn front_face(&self) -> Option<&CardFace> {
        self.card_faces.as_ref().and_then(|faces| faces.first())
    }

    /// Mana cost to display: the front face's cost, else the card's own
    pub fn display_mana_cost(&self) -> Option<&str> {
        self.front_face()
            .and_then(|face| face.mana_cost.as_deref())
            .filter(|cost| !cost.is_empty())
            .or(self.mana_cost.as_deref())
    }

    /// Image to display: the front face's image, else the card's own
    pub fn image_url(&self) -> Option<&str> {
        self.front_face()
            .and_then(|face| face.image_uris.as_ref())
            .and_then(ImageUris::preferred)
            .or_else(|| self.image_uris.as_ref().and_then(ImageUris::preferred))
    }

    /// USD price as a number, when the service reports one
    pub fn usd_price(&self) -> Option<f64> {
        self.prices
            .as_ref()
            .and_then(|prices| prices.usd.as_deref())
            .and_then(|usd| usd.parse::<f64>().ok())
    }

    pub fn purchase_link(&self) -> Option<&str> {
        self.purchase_uris
            .as_ref()
            .and_then(|uris| uris.tcgplayer.as_deref())
    }

    pub fn is_land(&self) -> bool {
        self.type_line
            .as_deref()
            .map(|line| line.to_lowercase().contains("land"))
            .unwrap_or(false)
    }
}

/// Scryfall error object, returned with non-success statuses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceError {
    pub object: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub details: Option<String>,
}
