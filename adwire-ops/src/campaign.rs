//! Campaign and budget operation builders

use adwire_core::{
    resource_name, temp_resource_name, AdwireResult, BiddingStrategyType, BudgetDelivery,
    Campaign, CampaignBudget, CampaignType, FieldMask, MaskedUpdate, MutateOperation,
    ResourceOperation, ShoppingSetting, Status,
};

/// Build an update operation changing a campaign's status. The mask is
/// exactly `["status"]`.
pub fn campaign_status_operation(
    customer_id: &str,
    campaign_id: &str,
    status: &str,
) -> AdwireResult<MutateOperation> {
    let status: Status = status.parse()?;
    Ok(MutateOperation::Campaign(ResourceOperation::Update {
        update: Campaign {
            resource_name: Some(resource_name(customer_id, "campaigns", campaign_id)),
            status: Some(status),
            ..Default::default()
        },
        update_mask: FieldMask::single("status"),
    }))
}

/// Build an update operation for campaign name and run dates. Only supplied
/// fields are written and masked, in declaration order.
pub fn campaign_update_operation(
    customer_id: &str,
    campaign_id: &str,
    name: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> MutateOperation {
    let mut masked = MaskedUpdate::new(Campaign {
        resource_name: Some(resource_name(customer_id, "campaigns", campaign_id)),
        ..Default::default()
    });
    masked.set_opt("name", name, |c, v| c.name = Some(v.to_string()));
    masked.set_opt("start_date", start_date, |c, v| {
        c.start_date = Some(v.to_string())
    });
    masked.set_opt("end_date", end_date, |c, v| c.end_date = Some(v.to_string()));
    MutateOperation::Campaign(masked.into_operation())
}

/// Build an update operation changing a budget's amount.
pub fn budget_update_operation(
    customer_id: &str,
    budget_id: &str,
    amount_micros: i64,
) -> MutateOperation {
    MutateOperation::CampaignBudget(ResourceOperation::Update {
        update: CampaignBudget {
            resource_name: Some(resource_name(customer_id, "campaignBudgets", budget_id)),
            amount_micros: Some(amount_micros),
            ..Default::default()
        },
        update_mask: FieldMask::single("amount_micros"),
    })
}

/// Build the atomic two-operation batch creating a campaign with its budget.
///
/// The budget is created first at a placeholder resource name and the
/// campaign references that placeholder, so the pair must be submitted in
/// this order in a single batch with partial failure disabled. The new
/// campaign starts paused.
#[allow(clippy::too_many_arguments)]
pub fn create_campaign_operations(
    customer_id: &str,
    name: &str,
    campaign_type: &str,
    bidding_strategy_type: &str,
    budget_amount_micros: i64,
    start_date: Option<&str>,
    end_date: Option<&str>,
    target_cpa_micros: Option<i64>,
    target_roas: Option<f64>,
) -> AdwireResult<Vec<MutateOperation>> {
    let campaign_type: CampaignType = campaign_type.parse()?;
    let strategy: BiddingStrategyType = bidding_strategy_type.parse()?;
    let budget_name = temp_resource_name(customer_id, "campaignBudgets");

    let budget_op = MutateOperation::CampaignBudget(ResourceOperation::Create {
        create: CampaignBudget {
            resource_name: Some(budget_name.clone()),
            name: Some(format!("{} Budget", name)),
            amount_micros: Some(budget_amount_micros),
            delivery_method: Some(BudgetDelivery::Standard),
        },
    });

    let mut campaign = Campaign {
        name: Some(name.to_string()),
        advertising_channel_type: Some(campaign_type),
        status: Some(Status::Paused),
        campaign_budget: Some(budget_name),
        start_date: start_date.map(str::to_string),
        end_date: end_date.map(str::to_string),
        ..Default::default()
    };
    campaign.set_bidding_strategy(strategy, target_cpa_micros, target_roas);

    let campaign_op = MutateOperation::Campaign(ResourceOperation::Create { create: campaign });

    Ok(vec![budget_op, campaign_op])
}

/// Build an update operation switching a campaign's bidding strategy. The
/// mask is the strategy's own field name.
pub fn bidding_strategy_operation(
    customer_id: &str,
    campaign_id: &str,
    strategy_type: &str,
    target_cpa_micros: Option<i64>,
    target_roas: Option<f64>,
) -> AdwireResult<MutateOperation> {
    let strategy: BiddingStrategyType = strategy_type.parse()?;
    let mut campaign = Campaign {
        resource_name: Some(resource_name(customer_id, "campaigns", campaign_id)),
        ..Default::default()
    };
    campaign.set_bidding_strategy(strategy, target_cpa_micros, target_roas);

    Ok(MutateOperation::Campaign(ResourceOperation::Update {
        update: campaign,
        update_mask: FieldMask::single(strategy.field_name()),
    }))
}

/// Build an update operation linking a Merchant Center account to a
/// shopping campaign. Masks use dotted paths under `shopping_setting`.
pub fn merchant_center_link_operation(
    customer_id: &str,
    campaign_id: &str,
    merchant_id: i64,
    feed_label: Option<&str>,
    sales_country: Option<&str>,
) -> MutateOperation {
    let mut masked = MaskedUpdate::new(Campaign {
        resource_name: Some(resource_name(customer_id, "campaigns", campaign_id)),
        shopping_setting: Some(ShoppingSetting::default()),
        ..Default::default()
    });
    masked.set("shopping_setting.merchant_id", merchant_id, |c, v| {
        c.shopping_setting.get_or_insert_with(Default::default).merchant_id = Some(v)
    });
    masked.set_opt("shopping_setting.feed_label", feed_label, |c, v| {
        c.shopping_setting.get_or_insert_with(Default::default).feed_label = Some(v.to_string())
    });
    masked.set_opt("shopping_setting.sales_country", sales_country, |c, v| {
        c.shopping_setting
            .get_or_insert_with(Default::default)
            .sales_country = Some(v.to_string())
    });
    MutateOperation::Campaign(masked.into_operation())
}
