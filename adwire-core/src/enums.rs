//! Code tables for the remote advertising API
//!
//! Human-readable domain values map to the integer codes the wire format
//! requires. Every table fails loudly on an unknown key: silently defaulting
//! a status or match type on a live-money platform is a correctness hazard,
//! so each `FromStr` returns `BuildError::UnknownEnumValue` instead of
//! falling back.

use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn normalize_token(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

// ============================================================================
// STATUS / MATCH TYPE
// ============================================================================

/// Entity status, shared by campaigns, ad groups, ads, and criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Status {
    Enabled,
    Paused,
    Removed,
}

impl Status {
    pub fn code(self) -> i32 {
        match self {
            Status::Enabled => 2,
            Status::Paused => 3,
            Status::Removed => 4,
        }
    }
}

impl From<Status> for i32 {
    fn from(s: Status) -> i32 {
        s.code()
    }
}

impl TryFrom<i32> for Status {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(Status::Enabled),
            3 => Ok(Status::Paused),
            4 => Ok(Status::Removed),
            other => Err(format!("Invalid status code: {}", other)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Enabled => "enable",
            Status::Paused => "pause",
            Status::Removed => "remove",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Status {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "enable" | "enabled" => Ok(Status::Enabled),
            "pause" | "paused" => Ok(Status::Paused),
            "remove" | "removed" => Ok(Status::Removed),
            _ => Err(BuildError::unknown("status", s)),
        }
    }
}

/// Keyword match type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum KeywordMatchType {
    Exact,
    Phrase,
    Broad,
}

impl KeywordMatchType {
    pub fn code(self) -> i32 {
        match self {
            KeywordMatchType::Exact => 2,
            KeywordMatchType::Phrase => 3,
            KeywordMatchType::Broad => 4,
        }
    }
}

impl From<KeywordMatchType> for i32 {
    fn from(m: KeywordMatchType) -> i32 {
        m.code()
    }
}

impl TryFrom<i32> for KeywordMatchType {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(KeywordMatchType::Exact),
            3 => Ok(KeywordMatchType::Phrase),
            4 => Ok(KeywordMatchType::Broad),
            other => Err(format!("Invalid match type code: {}", other)),
        }
    }
}

impl FromStr for KeywordMatchType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "exact" => Ok(KeywordMatchType::Exact),
            "phrase" => Ok(KeywordMatchType::Phrase),
            "broad" => Ok(KeywordMatchType::Broad),
            _ => Err(BuildError::unknown("match_type", s)),
        }
    }
}

// ============================================================================
// CAMPAIGN / AD GROUP TYPES
// ============================================================================

/// Advertising channel type for a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum CampaignType {
    Search,
    Display,
    Shopping,
    Video,
    PerformanceMax,
    DemandGen,
}

impl CampaignType {
    pub fn code(self) -> i32 {
        match self {
            CampaignType::Search => 2,
            CampaignType::Display => 3,
            CampaignType::Shopping => 4,
            CampaignType::Video => 6,
            CampaignType::PerformanceMax => 14,
            CampaignType::DemandGen => 15,
        }
    }
}

impl From<CampaignType> for i32 {
    fn from(t: CampaignType) -> i32 {
        t.code()
    }
}

impl TryFrom<i32> for CampaignType {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(CampaignType::Search),
            3 => Ok(CampaignType::Display),
            4 => Ok(CampaignType::Shopping),
            6 => Ok(CampaignType::Video),
            14 => Ok(CampaignType::PerformanceMax),
            15 => Ok(CampaignType::DemandGen),
            other => Err(format!("Invalid campaign type code: {}", other)),
        }
    }
}

impl FromStr for CampaignType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SEARCH" => Ok(CampaignType::Search),
            "DISPLAY" => Ok(CampaignType::Display),
            "SHOPPING" => Ok(CampaignType::Shopping),
            "VIDEO" => Ok(CampaignType::Video),
            "PERFORMANCE_MAX" => Ok(CampaignType::PerformanceMax),
            "DEMAND_GEN" => Ok(CampaignType::DemandGen),
            _ => Err(BuildError::unknown("campaign_type", s)),
        }
    }
}

/// Ad group type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum AdGroupType {
    SearchStandard,
    DisplayStandard,
    ShoppingProduct,
    VideoResponsive,
}

impl AdGroupType {
    pub fn code(self) -> i32 {
        match self {
            AdGroupType::SearchStandard => 2,
            AdGroupType::DisplayStandard => 3,
            AdGroupType::ShoppingProduct => 4,
            AdGroupType::VideoResponsive => 9,
        }
    }
}

impl From<AdGroupType> for i32 {
    fn from(t: AdGroupType) -> i32 {
        t.code()
    }
}

impl TryFrom<i32> for AdGroupType {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(AdGroupType::SearchStandard),
            3 => Ok(AdGroupType::DisplayStandard),
            4 => Ok(AdGroupType::ShoppingProduct),
            9 => Ok(AdGroupType::VideoResponsive),
            other => Err(format!("Invalid ad group type code: {}", other)),
        }
    }
}

impl FromStr for AdGroupType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SEARCH_STANDARD" => Ok(AdGroupType::SearchStandard),
            "DISPLAY_STANDARD" => Ok(AdGroupType::DisplayStandard),
            "SHOPPING_PRODUCT" => Ok(AdGroupType::ShoppingProduct),
            "VIDEO_RESPONSIVE" => Ok(AdGroupType::VideoResponsive),
            _ => Err(BuildError::unknown("ad_group_type", s)),
        }
    }
}

// ============================================================================
// DEVICE / BUDGET
// ============================================================================

/// Device targeting. The codes are criterion ids, not the device enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum DeviceType {
    Mobile,
    Desktop,
    Tablet,
}

impl DeviceType {
    pub fn criterion_id(self) -> i64 {
        match self {
            DeviceType::Mobile => 30001,
            DeviceType::Desktop => 30000,
            DeviceType::Tablet => 30002,
        }
    }
}

impl From<DeviceType> for i64 {
    fn from(d: DeviceType) -> i64 {
        d.criterion_id()
    }
}

impl TryFrom<i64> for DeviceType {
    type Error = String;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        match id {
            30001 => Ok(DeviceType::Mobile),
            30000 => Ok(DeviceType::Desktop),
            30002 => Ok(DeviceType::Tablet),
            other => Err(format!("Invalid device criterion id: {}", other)),
        }
    }
}

impl FromStr for DeviceType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MOBILE" => Ok(DeviceType::Mobile),
            "DESKTOP" => Ok(DeviceType::Desktop),
            "TABLET" => Ok(DeviceType::Tablet),
            _ => Err(BuildError::unknown("device", s)),
        }
    }
}

/// Budget delivery method. Only standard delivery is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum BudgetDelivery {
    Standard,
}

impl BudgetDelivery {
    pub fn code(self) -> i32 {
        2
    }
}

impl From<BudgetDelivery> for i32 {
    fn from(d: BudgetDelivery) -> i32 {
        d.code()
    }
}

impl TryFrom<i32> for BudgetDelivery {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(BudgetDelivery::Standard),
            other => Err(format!("Invalid budget delivery code: {}", other)),
        }
    }
}

// ============================================================================
// BIDDING STRATEGY
// ============================================================================

/// Bidding strategy selector. Each variant corresponds to exactly one
/// campaign sub-object; the dispatch lives in `Campaign::set_bidding_strategy`
/// so exhaustiveness is checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiddingStrategyType {
    ManualCpc,
    TargetCpa,
    TargetRoas,
    MaximizeConversions,
    MaximizeConversionValue,
    MaximizeClicks,
}

impl BiddingStrategyType {
    /// The campaign field name holding this strategy's sub-object. Doubles
    /// as the field-mask path for bidding-strategy updates.
    pub fn field_name(self) -> &'static str {
        match self {
            BiddingStrategyType::ManualCpc => "manual_cpc",
            BiddingStrategyType::TargetCpa => "target_cpa",
            BiddingStrategyType::TargetRoas => "target_roas",
            BiddingStrategyType::MaximizeConversions => "maximize_conversions",
            BiddingStrategyType::MaximizeConversionValue => "maximize_conversion_value",
            BiddingStrategyType::MaximizeClicks => "maximize_clicks",
        }
    }
}

impl FromStr for BiddingStrategyType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MANUAL_CPC" => Ok(BiddingStrategyType::ManualCpc),
            "TARGET_CPA" => Ok(BiddingStrategyType::TargetCpa),
            "TARGET_ROAS" => Ok(BiddingStrategyType::TargetRoas),
            "MAXIMIZE_CONVERSIONS" => Ok(BiddingStrategyType::MaximizeConversions),
            "MAXIMIZE_CONVERSION_VALUE" => Ok(BiddingStrategyType::MaximizeConversionValue),
            "MAXIMIZE_CLICKS" => Ok(BiddingStrategyType::MaximizeClicks),
            _ => Err(BuildError::unknown("bidding_strategy_type", s)),
        }
    }
}

// ============================================================================
// ASSETS
// ============================================================================

/// Asset content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum AssetType {
    Text,
    Image,
    YoutubeVideo,
    MediaBundle,
    CallToAction,
}

impl AssetType {
    pub fn code(self) -> i32 {
        match self {
            AssetType::Text => 4,
            AssetType::Image => 5,
            AssetType::YoutubeVideo => 2,
            AssetType::MediaBundle => 3,
            AssetType::CallToAction => 30,
        }
    }
}

impl From<AssetType> for i32 {
    fn from(t: AssetType) -> i32 {
        t.code()
    }
}

impl TryFrom<i32> for AssetType {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            4 => Ok(AssetType::Text),
            5 => Ok(AssetType::Image),
            2 => Ok(AssetType::YoutubeVideo),
            3 => Ok(AssetType::MediaBundle),
            30 => Ok(AssetType::CallToAction),
            other => Err(format!("Invalid asset type code: {}", other)),
        }
    }
}

impl FromStr for AssetType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TEXT" => Ok(AssetType::Text),
            "IMAGE" => Ok(AssetType::Image),
            "YOUTUBE_VIDEO" => Ok(AssetType::YoutubeVideo),
            "MEDIA_BUNDLE" => Ok(AssetType::MediaBundle),
            "CALL_TO_ACTION" => Ok(AssetType::CallToAction),
            _ => Err(BuildError::unknown("asset_type", s)),
        }
    }
}

/// Slot an asset occupies when linked to an asset group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum AssetFieldType {
    Headline,
    Description,
    LongHeadline,
    BusinessName,
    MarketingImage,
    SquareMarketingImage,
    Logo,
    LandscapeLogo,
    YoutubeVideo,
    CallToActionSelection,
}

impl AssetFieldType {
    pub fn code(self) -> i32 {
        match self {
            AssetFieldType::Headline => 2,
            AssetFieldType::Description => 3,
            AssetFieldType::LongHeadline => 19,
            AssetFieldType::BusinessName => 12,
            AssetFieldType::MarketingImage => 4,
            AssetFieldType::SquareMarketingImage => 11,
            AssetFieldType::Logo => 5,
            AssetFieldType::LandscapeLogo => 14,
            AssetFieldType::YoutubeVideo => 7,
            AssetFieldType::CallToActionSelection => 20,
        }
    }
}

impl From<AssetFieldType> for i32 {
    fn from(t: AssetFieldType) -> i32 {
        t.code()
    }
}

impl TryFrom<i32> for AssetFieldType {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(AssetFieldType::Headline),
            3 => Ok(AssetFieldType::Description),
            19 => Ok(AssetFieldType::LongHeadline),
            12 => Ok(AssetFieldType::BusinessName),
            4 => Ok(AssetFieldType::MarketingImage),
            11 => Ok(AssetFieldType::SquareMarketingImage),
            5 => Ok(AssetFieldType::Logo),
            14 => Ok(AssetFieldType::LandscapeLogo),
            7 => Ok(AssetFieldType::YoutubeVideo),
            20 => Ok(AssetFieldType::CallToActionSelection),
            other => Err(format!("Invalid asset field type code: {}", other)),
        }
    }
}

impl FromStr for AssetFieldType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HEADLINE" => Ok(AssetFieldType::Headline),
            "DESCRIPTION" => Ok(AssetFieldType::Description),
            "LONG_HEADLINE" => Ok(AssetFieldType::LongHeadline),
            "BUSINESS_NAME" => Ok(AssetFieldType::BusinessName),
            "MARKETING_IMAGE" => Ok(AssetFieldType::MarketingImage),
            "SQUARE_MARKETING_IMAGE" => Ok(AssetFieldType::SquareMarketingImage),
            "LOGO" => Ok(AssetFieldType::Logo),
            "LANDSCAPE_LOGO" => Ok(AssetFieldType::LandscapeLogo),
            "YOUTUBE_VIDEO" => Ok(AssetFieldType::YoutubeVideo),
            "CALL_TO_ACTION_SELECTION" => Ok(AssetFieldType::CallToActionSelection),
            _ => Err(BuildError::unknown("asset_field_type", s)),
        }
    }
}

/// Extension (asset) kind for legacy extension creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionType {
    Sitelink,
    Callout,
    Call,
    StructuredSnippet,
}

impl FromStr for ExtensionType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SITELINK" => Ok(ExtensionType::Sitelink),
            "CALLOUT" => Ok(ExtensionType::Callout),
            "CALL" => Ok(ExtensionType::Call),
            "STRUCTURED_SNIPPET" => Ok(ExtensionType::StructuredSnippet),
            _ => Err(BuildError::unknown("extension_type", s)),
        }
    }
}

// ============================================================================
// TARGETING DISPATCH
// ============================================================================

/// Level at which a (negative) keyword criterion attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionLevel {
    Campaign,
    AdGroup,
}

impl FromStr for CriterionLevel {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "campaign" => Ok(CriterionLevel::Campaign),
            "ad_group" | "adgroup" => Ok(CriterionLevel::AdGroup),
            _ => Err(BuildError::unknown("criterion_level", s)),
        }
    }
}

/// Demographic targeting dimension. Routes to exactly one criterion case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemographicDimension {
    Age,
    Gender,
    ParentalStatus,
    Income,
}

impl FromStr for DemographicDimension {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AGE" => Ok(DemographicDimension::Age),
            "GENDER" => Ok(DemographicDimension::Gender),
            "PARENTAL_STATUS" => Ok(DemographicDimension::ParentalStatus),
            "INCOME" => Ok(DemographicDimension::Income),
            _ => Err(BuildError::unknown("demographic_dimension", s)),
        }
    }
}

/// Audience segment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudienceType {
    InMarket,
    Affinity,
    CustomIntent,
    Remarketing,
}

impl AudienceType {
    /// Interest-based audiences reference a user interest category;
    /// remarketing references a user list.
    pub fn is_interest(self) -> bool {
        !matches!(self, AudienceType::Remarketing)
    }
}

impl FromStr for AudienceType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN_MARKET" => Ok(AudienceType::InMarket),
            "AFFINITY" => Ok(AudienceType::Affinity),
            "CUSTOM_INTENT" => Ok(AudienceType::CustomIntent),
            "REMARKETING" => Ok(AudienceType::Remarketing),
            _ => Err(BuildError::unknown("audience_type", s)),
        }
    }
}

// ============================================================================
// VIDEO / SHOPPING
// ============================================================================

/// Video ad sub-format. Determines which nested creative fields are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoAdFormat {
    InStreamSkippable,
    InStreamNonSkippable,
    Bumper,
    VideoResponsive,
}

impl VideoAdFormat {
    pub fn is_in_stream(self) -> bool {
        matches!(
            self,
            VideoAdFormat::InStreamSkippable | VideoAdFormat::InStreamNonSkippable
        )
    }
}

impl FromStr for VideoAdFormat {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN_STREAM_SKIPPABLE" => Ok(VideoAdFormat::InStreamSkippable),
            "IN_STREAM_NON_SKIPPABLE" => Ok(VideoAdFormat::InStreamNonSkippable),
            "BUMPER" => Ok(VideoAdFormat::Bumper),
            "VIDEO_RESPONSIVE" => Ok(VideoAdFormat::VideoResponsive),
            _ => Err(BuildError::unknown("video_ad_format", s)),
        }
    }
}

/// Listing group filter node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ListingGroupFilterType {
    UnitIncluded,
    UnitExcluded,
    Subdivision,
}

impl ListingGroupFilterType {
    pub fn code(self) -> i32 {
        match self {
            ListingGroupFilterType::UnitIncluded => 2,
            ListingGroupFilterType::UnitExcluded => 3,
            ListingGroupFilterType::Subdivision => 4,
        }
    }
}

impl From<ListingGroupFilterType> for i32 {
    fn from(t: ListingGroupFilterType) -> i32 {
        t.code()
    }
}

impl TryFrom<i32> for ListingGroupFilterType {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(ListingGroupFilterType::UnitIncluded),
            3 => Ok(ListingGroupFilterType::UnitExcluded),
            4 => Ok(ListingGroupFilterType::Subdivision),
            other => Err(format!("Invalid listing group filter type code: {}", other)),
        }
    }
}

impl FromStr for ListingGroupFilterType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UNIT_INCLUDED" => Ok(ListingGroupFilterType::UnitIncluded),
            "UNIT_EXCLUDED" => Ok(ListingGroupFilterType::UnitExcluded),
            "SUBDIVISION" => Ok(ListingGroupFilterType::Subdivision),
            _ => Err(BuildError::unknown("listing_group_filter_type", s)),
        }
    }
}
