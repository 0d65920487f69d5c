//! Asset, extension, asset-group, and listing-group builders
//!
//! Each builder routes fields into exactly one content sub-object selected
//! by a discrete type tag. Required-field rules per type (sitelink needs
//! link text and a URL, call needs phone and country, ...) are the tool
//! layer's job; these builders route already-valid input.

use adwire_core::{
    resource_name, AdwireResult, Asset, AssetFieldType, AssetGroup, AssetGroupAsset, AssetType,
    CallAsset, CallToActionAsset, CalloutAsset, ExtensionType, ImageAsset, ListingGroupCaseValue,
    ListingGroupFilter, ListingGroupFilterType, MutateOperation, ResourceOperation,
    SitelinkAsset, Status, StructuredSnippetAsset, TextAsset, YoutubeVideoAsset,
};

/// Build a create operation for a standalone asset. The asset type selects
/// the content sub-object.
pub fn create_asset_operation(
    _customer_id: &str,
    asset_type: &str,
    name: &str,
    text_content: Option<&str>,
    image_data: Option<&[u8]>,
    youtube_video_id: Option<&str>,
    call_to_action_type: Option<&str>,
) -> AdwireResult<MutateOperation> {
    let kind: AssetType = asset_type.parse()?;
    let mut asset = Asset {
        name: Some(name.to_string()),
        kind: Some(kind),
        ..Default::default()
    };

    match kind {
        AssetType::Text => {
            asset.text_asset = Some(TextAsset {
                text: text_content.unwrap_or_default().to_string(),
            });
        }
        AssetType::Image => {
            asset.image_asset = Some(ImageAsset::from_bytes(image_data.unwrap_or_default()));
        }
        AssetType::YoutubeVideo => {
            asset.youtube_video_asset = Some(YoutubeVideoAsset {
                youtube_video_id: youtube_video_id.unwrap_or_default().to_string(),
            });
        }
        AssetType::CallToAction => {
            asset.call_to_action_asset = Some(CallToActionAsset {
                call_to_action: call_to_action_type.unwrap_or_default().to_string(),
            });
        }
        // Media bundles are uploaded through the asset service directly and
        // carry no inline content here.
        AssetType::MediaBundle => {}
    }

    Ok(MutateOperation::Asset(ResourceOperation::Create {
        create: asset,
    }))
}

/// Optional field bag for extension assets. Which fields apply depends on
/// the extension type.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFields {
    pub link_text: Option<String>,
    pub final_urls: Vec<String>,
    pub description1: Option<String>,
    pub description2: Option<String>,
    pub callout_text: Option<String>,
    pub phone_number: Option<String>,
    pub country_code: Option<String>,
    pub snippet_header: Option<String>,
    pub snippet_values: Vec<String>,
}

/// Build a create operation for a campaign extension asset (sitelink,
/// callout, call, structured snippet).
pub fn create_extension_operation(
    _customer_id: &str,
    _campaign_id: &str,
    extension_type: &str,
    fields: &ExtensionFields,
) -> AdwireResult<MutateOperation> {
    let extension_type: ExtensionType = extension_type.parse()?;
    let mut asset = Asset::default();

    match extension_type {
        ExtensionType::Sitelink => {
            asset.sitelink_asset = Some(SitelinkAsset {
                link_text: fields.link_text.clone(),
                final_urls: fields.final_urls.clone(),
                description1: fields.description1.clone(),
                description2: fields.description2.clone(),
            });
        }
        ExtensionType::Callout => {
            asset.callout_asset = Some(CalloutAsset {
                callout_text: fields.callout_text.clone().unwrap_or_default(),
            });
        }
        ExtensionType::Call => {
            asset.call_asset = Some(CallAsset {
                phone_number: fields.phone_number.clone().unwrap_or_default(),
                country_code: fields.country_code.clone().unwrap_or_default(),
            });
        }
        ExtensionType::StructuredSnippet => {
            asset.structured_snippet_asset = Some(StructuredSnippetAsset {
                header: fields.snippet_header.clone().unwrap_or_default(),
                values: fields.snippet_values.clone(),
            });
        }
    }

    Ok(MutateOperation::Asset(ResourceOperation::Create {
        create: asset,
    }))
}

/// Build a create operation for an asset group under a Performance Max
/// campaign. New asset groups start enabled.
pub fn create_asset_group_operation(
    customer_id: &str,
    campaign_id: &str,
    name: &str,
    final_urls: &[String],
    final_mobile_urls: &[String],
    path1: Option<&str>,
    path2: Option<&str>,
) -> MutateOperation {
    MutateOperation::AssetGroup(ResourceOperation::Create {
        create: AssetGroup {
            name: Some(name.to_string()),
            campaign: Some(resource_name(customer_id, "campaigns", campaign_id)),
            final_urls: final_urls.to_vec(),
            final_mobile_urls: final_mobile_urls.to_vec(),
            path1: path1.map(str::to_string),
            path2: path2.map(str::to_string),
            status: Some(Status::Enabled),
            ..Default::default()
        },
    })
}

/// One asset-to-asset-group link request.
#[derive(Debug, Clone)]
pub struct AssetAssignment {
    pub asset_id: String,
    pub field_type: String,
}

/// Build one link operation per assignment, preserving input order.
pub fn asset_group_asset_operations(
    customer_id: &str,
    asset_group_id: &str,
    assignments: &[AssetAssignment],
) -> AdwireResult<Vec<MutateOperation>> {
    let asset_group = resource_name(customer_id, "assetGroups", asset_group_id);

    assignments
        .iter()
        .map(|assignment| {
            let field_type: AssetFieldType = assignment.field_type.parse()?;
            Ok(MutateOperation::AssetGroupAsset(ResourceOperation::Create {
                create: AssetGroupAsset {
                    asset_group: asset_group.clone(),
                    asset: resource_name(customer_id, "assets", &assignment.asset_id),
                    field_type,
                },
            }))
        })
        .collect()
}

/// Build a create operation for a listing group filter node. The targeting
/// dimension routes the value into exactly one case sub-field; unrecognized
/// dimensions leave the case value empty and the remote side rejects the
/// operation.
pub fn listing_group_filter_operation(
    customer_id: &str,
    asset_group_id: &str,
    filter_type: &str,
    dimension: &str,
    value: Option<&str>,
    parent_filter_id: Option<&str>,
) -> AdwireResult<MutateOperation> {
    let kind: ListingGroupFilterType = filter_type.parse()?;

    let filter = ListingGroupFilter {
        asset_group: Some(resource_name(customer_id, "assetGroups", asset_group_id)),
        kind: Some(kind),
        parent_listing_group_filter: parent_filter_id.map(|id| {
            resource_name(customer_id, "assetGroupListingGroupFilters", id)
        }),
        case_value: value.and_then(|v| ListingGroupCaseValue::from_dimension(dimension, v)),
    };

    Ok(MutateOperation::ListingGroupFilter(
        ResourceOperation::Create { create: filter },
    ))
}
