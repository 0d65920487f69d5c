//! adwire ops - mutate operation builders
//!
//! One pure function per domain action. Each builder turns validated domain
//! parameters into wire-ready `MutateOperation` values, handling resource
//! naming, enum translation, field masks, and batch ordering. Builders never
//! touch the network; submitting the result is `adwire-client`'s job.
//!
//! Batch-ordering contract: builders that return multiple operations
//! (notably campaign creation) emit them in the order the remote API must
//! apply them. Callers submit the vector as-is.

pub mod ad_group;
pub mod ads;
pub mod assets;
pub mod campaign;
pub mod keywords;
pub mod targeting;

pub use ad_group::{ad_group_status_operation, create_ad_group_operation};
pub use ads::{
    ad_status_operation, create_rsa_operation, demand_gen_ad_operation,
    responsive_display_ad_operation, video_ad_operation, DemandGenAdSpec,
    ResponsiveDisplayAdSpec, VideoAdSpec,
};
pub use assets::{
    asset_group_asset_operations, create_asset_group_operation, create_asset_operation,
    create_extension_operation, listing_group_filter_operation, AssetAssignment, ExtensionFields,
};
pub use campaign::{
    bidding_strategy_operation, budget_update_operation, campaign_status_operation,
    campaign_update_operation, create_campaign_operations, merchant_center_link_operation,
};
pub use keywords::{
    add_keywords_operations, negative_keyword_operations, update_keyword_operation,
};
pub use targeting::{
    audience_segment_operation, demographic_targeting_operations, device_targeting_operation,
    language_criterion_operations, location_criterion_operations,
};
