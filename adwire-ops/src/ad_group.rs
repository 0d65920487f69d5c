//! Ad group operation builders

use adwire_core::{
    resource_name, AdGroup, AdGroupType, AdwireResult, FieldMask, MutateOperation,
    ResourceOperation, Status,
};

/// Build an update operation changing an ad group's status. The mask is
/// exactly `["status"]`.
pub fn ad_group_status_operation(
    customer_id: &str,
    ad_group_id: &str,
    status: &str,
) -> AdwireResult<MutateOperation> {
    let status: Status = status.parse()?;
    Ok(MutateOperation::AdGroup(ResourceOperation::Update {
        update: AdGroup {
            resource_name: Some(resource_name(customer_id, "adGroups", ad_group_id)),
            status: Some(status),
            ..Default::default()
        },
        update_mask: FieldMask::single("status"),
    }))
}

/// Build a create operation for an ad group under an existing campaign.
/// New ad groups start enabled.
pub fn create_ad_group_operation(
    customer_id: &str,
    campaign_id: &str,
    name: &str,
    ad_group_type: &str,
    cpc_bid_micros: Option<i64>,
) -> AdwireResult<MutateOperation> {
    let kind: AdGroupType = ad_group_type.parse()?;
    Ok(MutateOperation::AdGroup(ResourceOperation::Create {
        create: AdGroup {
            name: Some(name.to_string()),
            campaign: Some(resource_name(customer_id, "campaigns", campaign_id)),
            kind: Some(kind),
            status: Some(Status::Enabled),
            cpc_bid_micros,
            ..Default::default()
        },
    }))
}
