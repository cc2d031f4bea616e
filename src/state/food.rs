//! Food plate record types.

use serde::{Deserialize, Serialize};

/// A menu item as stored by the backend.
///
/// Mirrors the REST wire shape exactly; the backend is the system of record
/// and assigns `id` on creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPlate {
    /// Server-assigned identifier, unique and immutable once created.
    pub id: u64,
    /// Display name of the plate.
    pub name: String,
    /// URL of the plate's picture.
    pub image: String,
    /// Price, kept as text the way the backend stores it.
    pub price: String,
    /// Free-form description shown in the list.
    pub description: String,
    /// Whether the plate is currently offered.
    pub available: bool,
}

/// The fields collected by the add/edit modal — a plate without `id` and
/// `available`, which the submit path fills in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl FoodDraft {
    /// Builds the draft from an existing record, for prefilling the edit modal.
    pub fn from_plate(plate: &FoodPlate) -> Self {
        Self {
            name: plate.name.clone(),
            image: plate.image.clone(),
            price: plate.price.clone(),
            description: plate.description.clone(),
        }
    }

    /// Assembles the full record sent to `PUT /foods/{id}`.
    pub fn into_plate(self, id: u64, available: bool) -> FoodPlate {
        FoodPlate {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FoodPlate {
        FoodPlate {
            id: 1,
            name: "Pizza".to_string(),
            image: "https://example.com/pizza.png".to_string(),
            price: "19.90".to_string(),
            description: "Wood-fired".to_string(),
            available: true,
        }
    }

    #[test]
    fn test_wire_shape_round_trip() {
        let json = r#"{
            "id": 7,
            "name": "Veggie bowl",
            "image": "https://example.com/bowl.png",
            "price": "21.00",
            "description": "Seasonal vegetables",
            "available": false
        }"#;
        let plate: FoodPlate = serde_json::from_str(json).expect("decode");
        assert_eq!(plate.id, 7);
        assert_eq!(plate.price, "21.00");
        assert!(!plate.available);

        let encoded = serde_json::to_value(&plate).expect("encode");
        assert_eq!(encoded["name"], "Veggie bowl");
        assert_eq!(encoded["available"], false);
    }

    #[test]
    fn test_draft_from_plate_drops_identity() {
        let draft = FoodDraft::from_plate(&sample());
        assert_eq!(draft.name, "Pizza");
        assert_eq!(draft.price, "19.90");
    }

    #[test]
    fn test_draft_into_plate_restores_identity() {
        let mut draft = FoodDraft::from_plate(&sample());
        draft.name = "Pasta".to_string();
        let plate = draft.into_plate(1, true);
        assert_eq!(plate.id, 1);
        assert_eq!(plate.name, "Pasta");
        assert!(plate.available);
    }
}
