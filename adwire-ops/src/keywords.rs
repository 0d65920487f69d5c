//! Keyword criterion builders

use adwire_core::{
    composite_id, resource_name, AdGroupCriterion, AdwireResult, CampaignCriterion,
    CriterionLevel, KeywordInfo, KeywordMatchType, MaskedUpdate, MutateOperation,
    ResourceOperation, Status,
};

/// Build one create operation per keyword, attaching positive keywords to an
/// ad group. Input order is preserved; an empty keyword list yields an empty
/// batch.
pub fn add_keywords_operations(
    customer_id: &str,
    ad_group_id: &str,
    keywords: &[String],
    match_type: &str,
    cpc_bid_micros: Option<i64>,
) -> AdwireResult<Vec<MutateOperation>> {
    let match_type: KeywordMatchType = match_type.parse()?;
    let ad_group = resource_name(customer_id, "adGroups", ad_group_id);

    Ok(keywords
        .iter()
        .map(|text| {
            MutateOperation::AdGroupCriterion(ResourceOperation::Create {
                create: AdGroupCriterion {
                    ad_group: Some(ad_group.clone()),
                    cpc_bid_micros,
                    keyword: Some(KeywordInfo {
                        text: text.clone(),
                        match_type,
                    }),
                    ..Default::default()
                },
            })
        })
        .collect())
}

/// Build one negative-keyword create operation per keyword, at campaign or
/// ad-group level. Every operation references the same parent resource.
pub fn negative_keyword_operations(
    customer_id: &str,
    level: &str,
    parent_id: &str,
    keywords: &[String],
    match_type: &str,
) -> AdwireResult<Vec<MutateOperation>> {
    let level: CriterionLevel = level.parse()?;
    let match_type: KeywordMatchType = match_type.parse()?;

    let ops = keywords
        .iter()
        .map(|text| {
            let keyword = Some(KeywordInfo {
                text: text.clone(),
                match_type,
            });
            match level {
                CriterionLevel::Campaign => {
                    MutateOperation::CampaignCriterion(ResourceOperation::Create {
                        create: CampaignCriterion {
                            campaign: Some(resource_name(customer_id, "campaigns", parent_id)),
                            negative: Some(true),
                            keyword,
                            ..Default::default()
                        },
                    })
                }
                CriterionLevel::AdGroup => {
                    MutateOperation::AdGroupCriterion(ResourceOperation::Create {
                        create: AdGroupCriterion {
                            ad_group: Some(resource_name(customer_id, "adGroups", parent_id)),
                            negative: Some(true),
                            keyword,
                            ..Default::default()
                        },
                    })
                }
            }
        })
        .collect();

    Ok(ops)
}

/// Build an update operation for an existing keyword criterion (bid and/or
/// status). Masked fields follow declaration order: cpc_bid_micros, status.
pub fn update_keyword_operation(
    customer_id: &str,
    ad_group_id: &str,
    criterion_id: &str,
    cpc_bid_micros: Option<i64>,
    status: Option<&str>,
) -> AdwireResult<MutateOperation> {
    let status = status.map(str::parse::<Status>).transpose()?;

    let mut masked = MaskedUpdate::new(AdGroupCriterion {
        resource_name: Some(resource_name(
            customer_id,
            "adGroupCriteria",
            &composite_id(ad_group_id, criterion_id),
        )),
        ..Default::default()
    });
    masked.set_opt("cpc_bid_micros", cpc_bid_micros, |c, v| {
        c.cpc_bid_micros = Some(v)
    });
    masked.set_opt("status", status, |c, v| c.status = Some(v));

    Ok(MutateOperation::AdGroupCriterion(masked.into_operation()))
}
