//! adwire core - wire types and code tables
//!
//! Pure data structures for the mutate-operation wire format: operation
//! records, field masks, resource naming, the enum/code tables, and the
//! error taxonomy. No I/O lives here; `adwire-ops` builds these values and
//! `adwire-client` submits them.

pub mod enums;
pub mod error;
pub mod naming;
pub mod operations;
pub mod resources;

pub use enums::{
    AdGroupType, AssetFieldType, AssetType, AudienceType, BiddingStrategyType, BudgetDelivery,
    CampaignType, CriterionLevel, DemographicDimension, DeviceType, ExtensionType,
    KeywordMatchType, ListingGroupFilterType, Status, VideoAdFormat,
};
pub use error::{AdwireError, AdwireResult, ApiError, BuildError};
pub use naming::{
    composite_id, geo_target_constant, language_constant, resource_name, temp_resource_name,
    TEMP_ID,
};
pub use operations::{FieldMask, MaskedUpdate, MutateOperation, ResourceOperation};
pub use resources::*;
