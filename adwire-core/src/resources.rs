//! Resource payloads for mutate operations
//!
//! Every struct here serializes field-for-field to the shape the remote API
//! accepts. Optional fields are skipped when unset so an update payload only
//! carries what the caller touched; the paired field mask (see
//! `operations::MaskedUpdate`) decides what the remote side actually applies.

use crate::enums::{
    AdGroupType, AssetFieldType, AssetType, BiddingStrategyType, BudgetDelivery, CampaignType,
    DemographicDimension, DeviceType, KeywordMatchType, ListingGroupFilterType, Status,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

fn is_empty<T>(v: &Vec<T>) -> bool {
    v.is_empty()
}

// ============================================================================
// CAMPAIGN / BUDGET
// ============================================================================

/// Campaign payload. Exactly one bidding sub-object may be populated; use
/// `set_bidding_strategy` rather than assigning the fields directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertising_channel_type: Option<CampaignType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_cpc: Option<ManualCpc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_cpa: Option<TargetCpa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_roas: Option<TargetRoas>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximize_conversions: Option<MaximizeConversions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximize_conversion_value: Option<MaximizeConversionValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximize_clicks: Option<MaximizeClicks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopping_setting: Option<ShoppingSetting>,
}

impl Campaign {
    /// Populate the sub-object for the given strategy. The match is
    /// exhaustive so adding a strategy without routing it fails to compile.
    pub fn set_bidding_strategy(
        &mut self,
        strategy: BiddingStrategyType,
        target_cpa_micros: Option<i64>,
        target_roas: Option<f64>,
    ) {
        match strategy {
            BiddingStrategyType::ManualCpc => {
                self.manual_cpc = Some(ManualCpc {});
            }
            BiddingStrategyType::TargetCpa => {
                self.target_cpa = Some(TargetCpa { target_cpa_micros });
            }
            BiddingStrategyType::TargetRoas => {
                self.target_roas = Some(TargetRoas { target_roas });
            }
            BiddingStrategyType::MaximizeConversions => {
                self.maximize_conversions = Some(MaximizeConversions {});
            }
            BiddingStrategyType::MaximizeConversionValue => {
                self.maximize_conversion_value = Some(MaximizeConversionValue {});
            }
            BiddingStrategyType::MaximizeClicks => {
                self.maximize_clicks = Some(MaximizeClicks {});
            }
        }
    }

    /// How many bidding sub-objects are populated. A correct payload has at
    /// most one.
    pub fn bidding_strategy_count(&self) -> usize {
        [
            self.manual_cpc.is_some(),
            self.target_cpa.is_some(),
            self.target_roas.is_some(),
            self.maximize_conversions.is_some(),
            self.maximize_conversion_value.is_some(),
            self.maximize_clicks.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// Manual CPC carries no target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualCpc {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetCpa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_cpa_micros: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetRoas {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_roas: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaximizeConversions {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaximizeConversionValue {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaximizeClicks {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoppingSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignBudget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_micros: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<BudgetDelivery>,
}

// ============================================================================
// AD GROUP / ADS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AdGroupType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpc_bid_micros: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdGroupAd {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad: Option<Ad>,
}

/// The underlying ad object with its per-format creative sub-structures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ad {
    #[serde(skip_serializing_if = "is_empty")]
    pub final_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive_search_ad: Option<ResponsiveSearchAdInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive_display_ad: Option<ResponsiveDisplayAdInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_ad: Option<VideoAdInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_responsive_ad: Option<VideoResponsiveAdInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand_gen_multi_asset_ad: Option<DemandGenMultiAssetAdInfo>,
}

/// A piece of ad text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdTextAsset {
    pub text: String,
}

impl AdTextAsset {
    pub fn new(text: impl Into<String>) -> Self {
        AdTextAsset { text: text.into() }
    }
}

/// A reference to an image asset by resource name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdImageAsset {
    pub asset: String,
}

/// A reference to a video asset by resource name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdVideoAsset {
    pub asset: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveSearchAdInfo {
    #[serde(skip_serializing_if = "is_empty")]
    pub headlines: Vec<AdTextAsset>,
    #[serde(skip_serializing_if = "is_empty")]
    pub descriptions: Vec<AdTextAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path2: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveDisplayAdInfo {
    #[serde(skip_serializing_if = "is_empty")]
    pub marketing_images: Vec<AdImageAsset>,
    #[serde(skip_serializing_if = "is_empty")]
    pub square_marketing_images: Vec<AdImageAsset>,
    #[serde(skip_serializing_if = "is_empty")]
    pub logo_images: Vec<AdImageAsset>,
    #[serde(skip_serializing_if = "is_empty")]
    pub headlines: Vec<AdTextAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_headline: Option<AdTextAsset>,
    #[serde(skip_serializing_if = "is_empty")]
    pub descriptions: Vec<AdTextAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoAdInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<AdVideoAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stream: Option<VideoInStreamInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bumper: Option<VideoBumperInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoInStreamInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companion_banner: Option<AdImageAsset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoBumperInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companion_banner: Option<AdImageAsset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoResponsiveAdInfo {
    #[serde(skip_serializing_if = "is_empty")]
    pub headlines: Vec<AdTextAsset>,
    #[serde(skip_serializing_if = "is_empty")]
    pub long_headlines: Vec<AdTextAsset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandGenMultiAssetAdInfo {
    #[serde(skip_serializing_if = "is_empty")]
    pub headlines: Vec<AdTextAsset>,
    #[serde(skip_serializing_if = "is_empty")]
    pub descriptions: Vec<AdTextAsset>,
    #[serde(skip_serializing_if = "is_empty")]
    pub marketing_images: Vec<AdImageAsset>,
    #[serde(skip_serializing_if = "is_empty")]
    pub logo_images: Vec<AdImageAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action_text: Option<String>,
}

// ============================================================================
// CRITERIA
// ============================================================================

/// Campaign-level targeting criterion. At most one case sub-object is set;
/// demographic cases go through `set_demographic`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignCriterion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_modifier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<KeywordInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_range: Option<DemographicInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<DemographicInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parental_status: Option<DemographicInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_range: Option<DemographicInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_interest: Option<UserInterestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_list: Option<UserListInfo>,
}

impl CampaignCriterion {
    /// Route a demographic value to the sub-object its dimension selects.
    pub fn set_demographic(&mut self, dimension: DemographicDimension, value: &str) {
        let info = DemographicInfo {
            kind: value.to_string(),
        };
        match dimension {
            DemographicDimension::Age => self.age_range = Some(info),
            DemographicDimension::Gender => self.gender = Some(info),
            DemographicDimension::ParentalStatus => self.parental_status = Some(info),
            DemographicDimension::Income => self.income_range = Some(info),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdGroupCriterion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpc_bid_micros: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<KeywordInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordInfo {
    pub text: String,
    pub match_type: KeywordMatchType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub geo_target_constant: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub language_constant: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    #[serde(rename = "type")]
    pub kind: DeviceType,
}

/// Demographic case value, sent as the remote API's enum-name string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicInfo {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInterestInfo {
    pub user_interest_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListInfo {
    pub user_list: String,
}

// ============================================================================
// ASSETS
// ============================================================================

/// Standalone asset. Exactly one content sub-object is populated per asset
/// type; the routing lives in the asset builders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_asset: Option<TextAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_asset: Option<ImageAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_video_asset: Option<YoutubeVideoAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action_asset: Option<CallToActionAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitelink_asset: Option<SitelinkAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callout_asset: Option<CalloutAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_asset: Option<CallAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_snippet_asset: Option<StructuredSnippetAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAsset {
    pub text: String,
}

/// Image bytes travel base64-encoded on the JSON wire; `file_size` records
/// the raw byte length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub data: String,
    pub file_size: i64,
}

impl ImageAsset {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        ImageAsset {
            data: BASE64.encode(bytes),
            file_size: bytes.len() as i64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoutubeVideoAsset {
    pub youtube_video_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToActionAsset {
    pub call_to_action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitelinkAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(skip_serializing_if = "is_empty")]
    pub final_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalloutAsset {
    pub callout_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallAsset {
    pub phone_number: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredSnippetAsset {
    pub header: String,
    pub values: Vec<String>,
}

// ============================================================================
// ASSET GROUPS / LISTING GROUPS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(skip_serializing_if = "is_empty")]
    pub final_urls: Vec<String>,
    #[serde(skip_serializing_if = "is_empty")]
    pub final_mobile_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// Link between an asset group and an asset, with the slot it fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetGroupAsset {
    pub asset_group: String,
    pub asset: String,
    pub field_type: AssetFieldType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingGroupFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_group: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ListingGroupFilterType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_listing_group_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_value: Option<ListingGroupCaseValue>,
}

/// Listing group case value. The enum guarantees exactly one dimension
/// sub-field per filter, matching the wire's oneof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingGroupCaseValue {
    ProductCategory { category_id: i64, level: String },
    ProductType { value: String, level: String },
    ProductCustomAttribute { value: String, index: String },
    ProductBrand { value: String },
    ProductItemId { value: String },
    ProductCondition { condition: String },
}

impl ListingGroupCaseValue {
    /// Map a targeting dimension tag to its case value. Unrecognized
    /// dimensions return `None` and leave the case value empty; the remote
    /// side rejects the operation, which is the intended surfacing point.
    pub fn from_dimension(dimension: &str, value: &str) -> Option<Self> {
        if dimension.starts_with("CATEGORY") {
            Some(ListingGroupCaseValue::ProductCategory {
                category_id: value.parse().unwrap_or(0),
                level: dimension.to_string(),
            })
        } else if dimension.starts_with("PRODUCT_TYPE") {
            Some(ListingGroupCaseValue::ProductType {
                value: value.to_string(),
                level: dimension.to_string(),
            })
        } else if dimension.starts_with("CUSTOM_LABEL") {
            Some(ListingGroupCaseValue::ProductCustomAttribute {
                value: value.to_string(),
                index: dimension.to_string(),
            })
        } else {
            match dimension {
                "BRAND" => Some(ListingGroupCaseValue::ProductBrand {
                    value: value.to_string(),
                }),
                "ITEM_ID" => Some(ListingGroupCaseValue::ProductItemId {
                    value: value.to_string(),
                }),
                "CONDITION" => Some(ListingGroupCaseValue::ProductCondition {
                    condition: value.to_string(),
                }),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_campaign_skips_unset_fields() {
        let campaign = Campaign {
            name: Some("Spring Sale".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&campaign).unwrap();
        assert_eq!(value, json!({ "name": "Spring Sale" }));
    }

    #[test]
    fn test_set_bidding_strategy_populates_exactly_one() {
        let mut campaign = Campaign::default();
        campaign.set_bidding_strategy(BiddingStrategyType::TargetCpa, Some(2_500_000), None);
        assert_eq!(campaign.bidding_strategy_count(), 1);
        assert_eq!(
            campaign.target_cpa,
            Some(TargetCpa {
                target_cpa_micros: Some(2_500_000)
            })
        );
        assert!(campaign.manual_cpc.is_none());
        assert!(campaign.target_roas.is_none());
    }

    #[test]
    fn test_manual_cpc_serializes_as_empty_object() {
        let mut campaign = Campaign::default();
        campaign.set_bidding_strategy(BiddingStrategyType::ManualCpc, None, None);
        let value = serde_json::to_value(&campaign).unwrap();
        assert_eq!(value, json!({ "manual_cpc": {} }));
    }

    #[test]
    fn test_demographic_routing_is_exclusive() {
        let mut criterion = CampaignCriterion::default();
        criterion.set_demographic(DemographicDimension::Gender, "FEMALE");
        assert_eq!(criterion.gender.as_ref().unwrap().kind, "FEMALE");
        assert!(criterion.age_range.is_none());
        assert!(criterion.parental_status.is_none());
        assert!(criterion.income_range.is_none());
    }

    #[test]
    fn test_device_info_serializes_criterion_id() {
        let info = DeviceInfo {
            kind: DeviceType::Mobile,
        };
        assert_eq!(serde_json::to_value(&info).unwrap(), json!({ "type": 30001 }));
    }

    #[test]
    fn test_image_asset_from_bytes() {
        let asset = ImageAsset::from_bytes(b"pretend-png");
        assert_eq!(asset.file_size, 11);
        assert_eq!(asset.data, "cHJldGVuZC1wbmc=");
    }

    #[test]
    fn test_case_value_category_dimension() {
        let cv = ListingGroupCaseValue::from_dimension("CATEGORY_LEVEL1", "632").unwrap();
        assert_eq!(
            cv,
            ListingGroupCaseValue::ProductCategory {
                category_id: 632,
                level: "CATEGORY_LEVEL1".to_string()
            }
        );
        assert_eq!(
            serde_json::to_value(&cv).unwrap(),
            json!({ "product_category": { "category_id": 632, "level": "CATEGORY_LEVEL1" } })
        );
    }

    #[test]
    fn test_case_value_non_numeric_category_falls_to_zero() {
        let cv = ListingGroupCaseValue::from_dimension("CATEGORY_LEVEL2", "shoes").unwrap();
        assert!(matches!(
            cv,
            ListingGroupCaseValue::ProductCategory { category_id: 0, .. }
        ));
    }

    #[test]
    fn test_case_value_custom_label_and_brand() {
        let label = ListingGroupCaseValue::from_dimension("CUSTOM_LABEL_0", "clearance").unwrap();
        assert_eq!(
            label,
            ListingGroupCaseValue::ProductCustomAttribute {
                value: "clearance".to_string(),
                index: "CUSTOM_LABEL_0".to_string()
            }
        );
        let brand = ListingGroupCaseValue::from_dimension("BRAND", "acme").unwrap();
        assert_eq!(
            serde_json::to_value(&brand).unwrap(),
            json!({ "product_brand": { "value": "acme" } })
        );
    }

    #[test]
    fn test_case_value_unknown_dimension_is_none() {
        assert!(ListingGroupCaseValue::from_dimension("COLOR", "red").is_none());
    }
}
