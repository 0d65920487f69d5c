//! Mutate operations and field masks
//!
//! A `MutateOperation` is the unit submitted to the remote mutate endpoint.
//! The enum is externally tagged so each variant serializes to the wire's
//! discriminated record, e.g.
//! `{"campaign_operation": {"update": {...}, "update_mask": {"paths": ["status"]}}}`.
//!
//! A batch is an ordered `Vec<MutateOperation>`. When an operation references
//! a placeholder resource name created earlier in the same batch, the remote
//! API resolves it strictly in submission order, so batches must never be
//! reordered.

use crate::resources::{
    AdGroup, AdGroupAd, AdGroupCriterion, Asset, AssetGroup, AssetGroupAsset, Campaign,
    CampaignBudget, CampaignCriterion, ListingGroupFilter,
};
use serde::{Deserialize, Serialize};

/// Ordered list of dotted field paths an update intends to change. Fields
/// not listed are ignored by the remote API even if present in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMask {
    pub paths: Vec<String>,
}

impl FieldMask {
    pub fn single(path: &str) -> Self {
        FieldMask {
            paths: vec![path.to_string()],
        }
    }
}

/// A single mutate operation: create a full resource, or update a partial
/// one under an explicit field mask. Never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceOperation<T> {
    Create {
        create: T,
    },
    Update {
        update: T,
        update_mask: FieldMask,
    },
}

impl<T> ResourceOperation<T> {
    pub fn is_create(&self) -> bool {
        matches!(self, ResourceOperation::Create { .. })
    }

    /// The payload regardless of operation kind.
    pub fn payload(&self) -> &T {
        match self {
            ResourceOperation::Create { create } => create,
            ResourceOperation::Update { update, .. } => update,
        }
    }

    pub fn update_mask(&self) -> Option<&FieldMask> {
        match self {
            ResourceOperation::Create { .. } => None,
            ResourceOperation::Update { update_mask, .. } => Some(update_mask),
        }
    }
}

/// Accumulator pairing each written field with its mask entry. `set` is the
/// only way to touch the payload, so the payload and mask cannot drift
/// apart. Paths are recorded in call order; builders call `set` in field
/// declaration order to keep masks deterministic.
#[derive(Debug)]
pub struct MaskedUpdate<T> {
    update: T,
    mask: FieldMask,
}

impl<T> MaskedUpdate<T> {
    pub fn new(update: T) -> Self {
        MaskedUpdate {
            update,
            mask: FieldMask::default(),
        }
    }

    /// Write a value into the payload and record its mask path.
    pub fn set<V>(&mut self, path: &str, value: V, write: impl FnOnce(&mut T, V)) {
        write(&mut self.update, value);
        self.mask.paths.push(path.to_string());
    }

    /// Write a value only when present.
    pub fn set_opt<V>(&mut self, path: &str, value: Option<V>, write: impl FnOnce(&mut T, V)) {
        if let Some(value) = value {
            self.set(path, value, write);
        }
    }

    pub fn into_operation(self) -> ResourceOperation<T> {
        ResourceOperation::Update {
            update: self.update,
            update_mask: self.mask,
        }
    }
}

/// Tagged union over the resource kind being mutated. Variant names follow
/// the wire's `<resource>_operation` discriminators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MutateOperation {
    #[serde(rename = "campaign_operation")]
    Campaign(ResourceOperation<Campaign>),
    #[serde(rename = "campaign_budget_operation")]
    CampaignBudget(ResourceOperation<CampaignBudget>),
    #[serde(rename = "ad_group_operation")]
    AdGroup(ResourceOperation<AdGroup>),
    #[serde(rename = "ad_group_ad_operation")]
    AdGroupAd(ResourceOperation<AdGroupAd>),
    #[serde(rename = "campaign_criterion_operation")]
    CampaignCriterion(ResourceOperation<CampaignCriterion>),
    #[serde(rename = "ad_group_criterion_operation")]
    AdGroupCriterion(ResourceOperation<AdGroupCriterion>),
    #[serde(rename = "asset_operation")]
    Asset(ResourceOperation<Asset>),
    #[serde(rename = "asset_group_operation")]
    AssetGroup(ResourceOperation<AssetGroup>),
    #[serde(rename = "asset_group_asset_operation")]
    AssetGroupAsset(ResourceOperation<AssetGroupAsset>),
    #[serde(rename = "asset_group_listing_group_filter_operation")]
    ListingGroupFilter(ResourceOperation<ListingGroupFilter>),
}

impl MutateOperation {
    pub fn is_create(&self) -> bool {
        match self {
            MutateOperation::Campaign(op) => op.is_create(),
            MutateOperation::CampaignBudget(op) => op.is_create(),
            MutateOperation::AdGroup(op) => op.is_create(),
            MutateOperation::AdGroupAd(op) => op.is_create(),
            MutateOperation::CampaignCriterion(op) => op.is_create(),
            MutateOperation::AdGroupCriterion(op) => op.is_create(),
            MutateOperation::Asset(op) => op.is_create(),
            MutateOperation::AssetGroup(op) => op.is_create(),
            MutateOperation::AssetGroupAsset(op) => op.is_create(),
            MutateOperation::ListingGroupFilter(op) => op.is_create(),
        }
    }

    /// The update mask, when this is an update operation.
    pub fn update_mask(&self) -> Option<&FieldMask> {
        match self {
            MutateOperation::Campaign(op) => op.update_mask(),
            MutateOperation::CampaignBudget(op) => op.update_mask(),
            MutateOperation::AdGroup(op) => op.update_mask(),
            MutateOperation::AdGroupAd(op) => op.update_mask(),
            MutateOperation::CampaignCriterion(op) => op.update_mask(),
            MutateOperation::AdGroupCriterion(op) => op.update_mask(),
            MutateOperation::Asset(op) => op.update_mask(),
            MutateOperation::AssetGroup(op) => op.update_mask(),
            MutateOperation::AssetGroupAsset(op) => op.update_mask(),
            MutateOperation::ListingGroupFilter(op) => op.update_mask(),
        }
    }

    /// The mask paths, empty for creates. Convenient for assertions.
    pub fn mask_paths(&self) -> Vec<String> {
        self.update_mask()
            .map(|m| m.paths.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Status;
    use serde_json::json;

    #[test]
    fn test_create_wire_shape() {
        let op = MutateOperation::CampaignBudget(ResourceOperation::Create {
            create: CampaignBudget {
                name: Some("Budget".to_string()),
                amount_micros: Some(5_000_000),
                ..Default::default()
            },
        });
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(
            value,
            json!({
                "campaign_budget_operation": {
                    "create": { "name": "Budget", "amount_micros": 5_000_000 }
                }
            })
        );
    }

    #[test]
    fn test_update_wire_shape_includes_mask() {
        let op = MutateOperation::Campaign(ResourceOperation::Update {
            update: Campaign {
                resource_name: Some("customers/1234567890/campaigns/123".to_string()),
                status: Some(Status::Paused),
                ..Default::default()
            },
            update_mask: FieldMask::single("status"),
        });
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(
            value,
            json!({
                "campaign_operation": {
                    "update": {
                        "resource_name": "customers/1234567890/campaigns/123",
                        "status": 3
                    },
                    "update_mask": { "paths": ["status"] }
                }
            })
        );
    }

    #[test]
    fn test_operation_is_create_xor_update() {
        let create = ResourceOperation::Create {
            create: Campaign::default(),
        };
        assert!(create.is_create());
        assert!(create.update_mask().is_none());

        let update = ResourceOperation::Update {
            update: Campaign::default(),
            update_mask: FieldMask::single("name"),
        };
        assert!(!update.is_create());
        assert_eq!(update.update_mask().unwrap().paths, vec!["name"]);
    }

    #[test]
    fn test_masked_update_pairs_field_and_path() {
        let mut masked = MaskedUpdate::new(Campaign::default());
        masked.set("name", "Renamed".to_string(), |c, v| c.name = Some(v));
        masked.set_opt("start_date", None::<String>, |c, v| c.start_date = Some(v));
        masked.set_opt("end_date", Some("2026-12-31".to_string()), |c, v| {
            c.end_date = Some(v)
        });

        let op = masked.into_operation();
        assert_eq!(op.update_mask().unwrap().paths, vec!["name", "end_date"]);
        assert_eq!(op.payload().name.as_deref(), Some("Renamed"));
        assert!(op.payload().start_date.is_none());
        assert_eq!(op.payload().end_date.as_deref(), Some("2026-12-31"));
    }

    #[test]
    fn test_round_trip_through_json() {
        let op = MutateOperation::Campaign(ResourceOperation::Update {
            update: Campaign {
                resource_name: Some("customers/1/campaigns/2".to_string()),
                status: Some(Status::Enabled),
                ..Default::default()
            },
            update_mask: FieldMask::single("status"),
        });
        let text = serde_json::to_string(&op).unwrap();
        let back: MutateOperation = serde_json::from_str(&text).unwrap();
        assert_eq!(back, op);
    }
}
