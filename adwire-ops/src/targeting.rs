//! Campaign targeting criterion builders

use adwire_core::{
    geo_target_constant, language_constant, resource_name, AdwireResult, AudienceType,
    CampaignCriterion, DemographicDimension, DeviceInfo, DeviceType, LanguageInfo, LocationInfo,
    MutateOperation, ResourceOperation, UserInterestInfo, UserListInfo,
};

fn campaign_criterion(customer_id: &str, campaign_id: &str) -> CampaignCriterion {
    CampaignCriterion {
        campaign: Some(resource_name(customer_id, "campaigns", campaign_id)),
        ..Default::default()
    }
}

/// Build one criterion create operation per geo target. Excluded locations
/// are negative-flagged.
pub fn location_criterion_operations(
    customer_id: &str,
    campaign_id: &str,
    location_ids: &[i64],
    exclude: bool,
) -> Vec<MutateOperation> {
    location_ids
        .iter()
        .map(|loc_id| {
            let mut criterion = campaign_criterion(customer_id, campaign_id);
            criterion.location = Some(LocationInfo {
                geo_target_constant: geo_target_constant(*loc_id),
            });
            if exclude {
                criterion.negative = Some(true);
            }
            MutateOperation::CampaignCriterion(ResourceOperation::Create { create: criterion })
        })
        .collect()
}

/// Build one criterion create operation per language constant.
pub fn language_criterion_operations(
    customer_id: &str,
    campaign_id: &str,
    language_ids: &[i64],
) -> Vec<MutateOperation> {
    language_ids
        .iter()
        .map(|lang_id| {
            let mut criterion = campaign_criterion(customer_id, campaign_id);
            criterion.language = Some(LanguageInfo {
                language_constant: language_constant(*lang_id),
            });
            MutateOperation::CampaignCriterion(ResourceOperation::Create { create: criterion })
        })
        .collect()
}

/// Build a device bid-adjustment criterion.
pub fn device_targeting_operation(
    customer_id: &str,
    campaign_id: &str,
    device: &str,
    bid_modifier: f64,
) -> AdwireResult<MutateOperation> {
    let device: DeviceType = device.parse()?;
    let mut criterion = campaign_criterion(customer_id, campaign_id);
    criterion.device = Some(DeviceInfo { kind: device });
    criterion.bid_modifier = Some(bid_modifier);
    Ok(MutateOperation::CampaignCriterion(
        ResourceOperation::Create { create: criterion },
    ))
}

/// Build one criterion per demographic value. The dimension picks which
/// case sub-object receives the value.
pub fn demographic_targeting_operations(
    customer_id: &str,
    campaign_id: &str,
    dimension: &str,
    values: &[String],
    bid_modifier: Option<f64>,
) -> AdwireResult<Vec<MutateOperation>> {
    let dimension: DemographicDimension = dimension.parse()?;

    Ok(values
        .iter()
        .map(|value| {
            let mut criterion = campaign_criterion(customer_id, campaign_id);
            criterion.set_demographic(dimension, value);
            criterion.bid_modifier = bid_modifier;
            MutateOperation::CampaignCriterion(ResourceOperation::Create { create: criterion })
        })
        .collect())
}

/// Build an audience segment criterion. Interest-based audiences reference a
/// user interest category; remarketing references a user list.
pub fn audience_segment_operation(
    customer_id: &str,
    campaign_id: &str,
    audience_type: &str,
    audience_id: &str,
    bid_modifier: Option<f64>,
) -> AdwireResult<MutateOperation> {
    let audience_type: AudienceType = audience_type.parse()?;
    let mut criterion = campaign_criterion(customer_id, campaign_id);

    if audience_type.is_interest() {
        criterion.user_interest = Some(UserInterestInfo {
            user_interest_category: resource_name(customer_id, "userInterests", audience_id),
        });
    } else {
        criterion.user_list = Some(UserListInfo {
            user_list: resource_name(customer_id, "userLists", audience_id),
        });
    }
    criterion.bid_modifier = bid_modifier;

    Ok(MutateOperation::CampaignCriterion(
        ResourceOperation::Create { create: criterion },
    ))
}
