//! Ad creation and status builders
//!
//! The creative builders assemble the nested structures each ad format
//! requires. Required-field rules (in-stream needs a headline and final URL,
//! bumper needs neither) are enforced upstream by the tool layer; builders
//! route already-valid input to the right sub-structure.

use adwire_core::{
    composite_id, resource_name, Ad, AdGroupAd, AdImageAsset, AdTextAsset, AdVideoAsset,
    AdwireResult, FieldMask, MutateOperation, ResourceOperation, ResponsiveDisplayAdInfo,
    ResponsiveSearchAdInfo, Status, VideoAdFormat, VideoAdInfo, VideoBumperInfo,
    VideoInStreamInfo, VideoResponsiveAdInfo, DemandGenMultiAssetAdInfo,
};

/// Build an update operation changing an ad's status. Ads are keyed by the
/// composite `{ad_group_id}~{ad_id}`; the mask is exactly `["status"]`.
pub fn ad_status_operation(
    customer_id: &str,
    ad_group_id: &str,
    ad_id: &str,
    status: &str,
) -> AdwireResult<MutateOperation> {
    let status: Status = status.parse()?;
    Ok(MutateOperation::AdGroupAd(ResourceOperation::Update {
        update: AdGroupAd {
            resource_name: Some(resource_name(
                customer_id,
                "adGroupAds",
                &composite_id(ad_group_id, ad_id),
            )),
            status: Some(status),
            ..Default::default()
        },
        update_mask: FieldMask::single("status"),
    }))
}

fn text_assets(texts: &[String]) -> Vec<AdTextAsset> {
    texts.iter().map(|t| AdTextAsset::new(t.as_str())).collect()
}

fn image_assets(customer_id: &str, asset_ids: &[String]) -> Vec<AdImageAsset> {
    asset_ids
        .iter()
        .map(|id| AdImageAsset {
            asset: resource_name(customer_id, "assets", id),
        })
        .collect()
}

/// Build a create operation for a responsive search ad.
pub fn create_rsa_operation(
    customer_id: &str,
    ad_group_id: &str,
    headlines: &[String],
    descriptions: &[String],
    final_urls: &[String],
    path1: Option<&str>,
    path2: Option<&str>,
) -> MutateOperation {
    let ad = Ad {
        final_urls: final_urls.to_vec(),
        responsive_search_ad: Some(ResponsiveSearchAdInfo {
            headlines: text_assets(headlines),
            descriptions: text_assets(descriptions),
            path1: path1.map(str::to_string),
            path2: path2.map(str::to_string),
        }),
        ..Default::default()
    };
    MutateOperation::AdGroupAd(ResourceOperation::Create {
        create: AdGroupAd {
            ad_group: Some(resource_name(customer_id, "adGroups", ad_group_id)),
            status: Some(Status::Enabled),
            ad: Some(ad),
            ..Default::default()
        },
    })
}

/// Creative inputs for a responsive display ad.
#[derive(Debug, Clone, Default)]
pub struct ResponsiveDisplayAdSpec {
    pub ad_group_id: String,
    pub marketing_image_asset_ids: Vec<String>,
    pub headlines: Vec<String>,
    pub long_headline: String,
    pub descriptions: Vec<String>,
    pub business_name: String,
    pub final_urls: Vec<String>,
    pub logo_asset_ids: Vec<String>,
    pub square_image_asset_ids: Vec<String>,
}

/// Build a create operation for a responsive display ad. Image assets are
/// referenced by resource name.
pub fn responsive_display_ad_operation(
    customer_id: &str,
    spec: &ResponsiveDisplayAdSpec,
) -> MutateOperation {
    let rda = ResponsiveDisplayAdInfo {
        marketing_images: image_assets(customer_id, &spec.marketing_image_asset_ids),
        square_marketing_images: image_assets(customer_id, &spec.square_image_asset_ids),
        logo_images: image_assets(customer_id, &spec.logo_asset_ids),
        headlines: text_assets(&spec.headlines),
        long_headline: Some(AdTextAsset::new(spec.long_headline.as_str())),
        descriptions: text_assets(&spec.descriptions),
        business_name: Some(spec.business_name.clone()),
    };
    MutateOperation::AdGroupAd(ResourceOperation::Create {
        create: AdGroupAd {
            ad_group: Some(resource_name(customer_id, "adGroups", &spec.ad_group_id)),
            status: Some(Status::Enabled),
            ad: Some(Ad {
                final_urls: spec.final_urls.clone(),
                responsive_display_ad: Some(rda),
                ..Default::default()
            }),
            ..Default::default()
        },
    })
}

/// Creative inputs for a video ad.
#[derive(Debug, Clone, Default)]
pub struct VideoAdSpec {
    pub ad_group_id: String,
    pub video_asset_id: String,
    pub ad_format: String,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub final_url: Option<String>,
    pub display_url: Option<String>,
    pub companion_banner_asset_id: Option<String>,
}

/// Build a create operation for a video ad. The sub-format decides which
/// nested creative fields are populated; every format carries the video
/// asset reference.
pub fn video_ad_operation(customer_id: &str, spec: &VideoAdSpec) -> AdwireResult<MutateOperation> {
    let format: VideoAdFormat = spec.ad_format.parse()?;

    let mut ad = Ad::default();
    if let Some(url) = &spec.final_url {
        ad.final_urls.push(url.clone());
    }
    ad.display_url = spec.display_url.clone();

    let mut video_ad = VideoAdInfo {
        video: Some(AdVideoAsset {
            asset: resource_name(customer_id, "assets", &spec.video_asset_id),
        }),
        ..Default::default()
    };

    if format.is_in_stream() {
        video_ad.in_stream = Some(VideoInStreamInfo {
            action_headline: Some(spec.headline.clone().unwrap_or_default()),
            companion_banner: spec.companion_banner_asset_id.as_ref().map(|id| AdImageAsset {
                asset: resource_name(customer_id, "assets", id),
            }),
        });
    } else if format == VideoAdFormat::Bumper {
        video_ad.bumper = Some(VideoBumperInfo::default());
    } else {
        // VIDEO_RESPONSIVE keeps its creative lists on a separate sub-object.
        let mut responsive = VideoResponsiveAdInfo::default();
        if let Some(headline) = &spec.headline {
            responsive.headlines.push(AdTextAsset::new(headline.as_str()));
        }
        if let Some(description) = &spec.description {
            responsive.long_headlines.push(AdTextAsset::new(description.as_str()));
        }
        ad.video_responsive_ad = Some(responsive);
    }

    ad.video_ad = Some(video_ad);

    Ok(MutateOperation::AdGroupAd(ResourceOperation::Create {
        create: AdGroupAd {
            ad_group: Some(resource_name(customer_id, "adGroups", &spec.ad_group_id)),
            status: Some(Status::Enabled),
            ad: Some(ad),
            ..Default::default()
        },
    }))
}

/// Creative inputs for a demand-gen multi-asset ad.
#[derive(Debug, Clone, Default)]
pub struct DemandGenAdSpec {
    pub ad_group_id: String,
    pub headlines: Vec<String>,
    pub descriptions: Vec<String>,
    pub marketing_image_asset_ids: Vec<String>,
    pub logo_asset_id: String,
    pub business_name: String,
    pub final_urls: Vec<String>,
    pub call_to_action: Option<String>,
}

/// Build a create operation for a demand-gen multi-asset ad.
pub fn demand_gen_ad_operation(customer_id: &str, spec: &DemandGenAdSpec) -> MutateOperation {
    let dg = DemandGenMultiAssetAdInfo {
        headlines: text_assets(&spec.headlines),
        descriptions: text_assets(&spec.descriptions),
        marketing_images: image_assets(customer_id, &spec.marketing_image_asset_ids),
        logo_images: image_assets(customer_id, std::slice::from_ref(&spec.logo_asset_id)),
        business_name: Some(spec.business_name.clone()),
        call_to_action_text: spec.call_to_action.clone(),
    };
    MutateOperation::AdGroupAd(ResourceOperation::Create {
        create: AdGroupAd {
            ad_group: Some(resource_name(customer_id, "adGroups", &spec.ad_group_id)),
            status: Some(Status::Enabled),
            ad: Some(Ad {
                final_urls: spec.final_urls.clone(),
                demand_gen_multi_asset_ad: Some(dg),
                ..Default::default()
            }),
            ..Default::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CID: &str = "1234567890";

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ad_status_uses_composite_key() {
        let op = ad_status_operation(CID, "555", "777", "remove").unwrap();
        assert_eq!(op.mask_paths(), vec!["status"]);
        match &op {
            MutateOperation::AdGroupAd(inner) => {
                assert_eq!(
                    inner.payload().resource_name.as_deref(),
                    Some("customers/1234567890/adGroupAds/555~777")
                );
            }
            other => panic!("expected ad group ad operation, got {:?}", other),
        }
    }

    #[test]
    fn test_rsa_preserves_creative_order() {
        let op = create_rsa_operation(
            CID,
            "555",
            &strings(&["H1", "H2", "H3"]),
            &strings(&["D1", "D2"]),
            &strings(&["https://example.com"]),
            Some("deals"),
            None,
        );
        match &op {
            MutateOperation::AdGroupAd(inner) => {
                assert!(inner.is_create());
                let ad = inner.payload().ad.as_ref().unwrap();
                let rsa = ad.responsive_search_ad.as_ref().unwrap();
                let heads: Vec<&str> = rsa.headlines.iter().map(|h| h.text.as_str()).collect();
                assert_eq!(heads, vec!["H1", "H2", "H3"]);
                assert_eq!(rsa.descriptions.len(), 2);
                assert_eq!(rsa.path1.as_deref(), Some("deals"));
                assert!(rsa.path2.is_none());
                assert_eq!(ad.final_urls, vec!["https://example.com"]);
            }
            other => panic!("expected ad group ad operation, got {:?}", other),
        }
    }

    #[test]
    fn test_responsive_display_ad_references_assets_by_name() {
        let spec = ResponsiveDisplayAdSpec {
            ad_group_id: "555".to_string(),
            marketing_image_asset_ids: strings(&["900", "901"]),
            headlines: strings(&["H1"]),
            long_headline: "The long one".to_string(),
            descriptions: strings(&["D1"]),
            business_name: "Acme".to_string(),
            final_urls: strings(&["https://example.com"]),
            logo_asset_ids: strings(&["950"]),
            square_image_asset_ids: vec![],
        };
        let op = responsive_display_ad_operation(CID, &spec);
        match &op {
            MutateOperation::AdGroupAd(inner) => {
                let rda = inner
                    .payload()
                    .ad
                    .as_ref()
                    .unwrap()
                    .responsive_display_ad
                    .as_ref()
                    .unwrap();
                assert_eq!(
                    rda.marketing_images[0].asset,
                    "customers/1234567890/assets/900"
                );
                assert_eq!(rda.logo_images[0].asset, "customers/1234567890/assets/950");
                assert!(rda.square_marketing_images.is_empty());
                assert_eq!(rda.long_headline.as_ref().unwrap().text, "The long one");
                assert_eq!(rda.business_name.as_deref(), Some("Acme"));
            }
            other => panic!("expected ad group ad operation, got {:?}", other),
        }
    }

    #[test]
    fn test_video_ad_in_stream_sets_action_headline() {
        let spec = VideoAdSpec {
            ad_group_id: "555".to_string(),
            video_asset_id: "800".to_string(),
            ad_format: "IN_STREAM_SKIPPABLE".to_string(),
            headline: Some("Watch now".to_string()),
            final_url: Some("https://example.com".to_string()),
            companion_banner_asset_id: Some("801".to_string()),
            ..Default::default()
        };
        let op = video_ad_operation(CID, &spec).unwrap();
        match &op {
            MutateOperation::AdGroupAd(inner) => {
                let ad = inner.payload().ad.as_ref().unwrap();
                let video = ad.video_ad.as_ref().unwrap();
                let in_stream = video.in_stream.as_ref().unwrap();
                assert_eq!(in_stream.action_headline.as_deref(), Some("Watch now"));
                assert_eq!(
                    in_stream.companion_banner.as_ref().unwrap().asset,
                    "customers/1234567890/assets/801"
                );
                assert_eq!(
                    video.video.as_ref().unwrap().asset,
                    "customers/1234567890/assets/800"
                );
                assert!(video.bumper.is_none());
                assert!(ad.video_responsive_ad.is_none());
                assert_eq!(ad.final_urls, vec!["https://example.com"]);
            }
            other => panic!("expected ad group ad operation, got {:?}", other),
        }
    }

    #[test]
    fn test_video_ad_bumper_needs_no_headline() {
        let spec = VideoAdSpec {
            ad_group_id: "555".to_string(),
            video_asset_id: "800".to_string(),
            ad_format: "BUMPER".to_string(),
            ..Default::default()
        };
        let op = video_ad_operation(CID, &spec).unwrap();
        match &op {
            MutateOperation::AdGroupAd(inner) => {
                let video = inner.payload().ad.as_ref().unwrap().video_ad.as_ref().unwrap();
                assert!(video.bumper.is_some());
                assert!(video.in_stream.is_none());
                assert!(video.video.is_some());
            }
            other => panic!("expected ad group ad operation, got {:?}", other),
        }
    }

    #[test]
    fn test_video_ad_responsive_splits_creative_lists() {
        let spec = VideoAdSpec {
            ad_group_id: "555".to_string(),
            video_asset_id: "800".to_string(),
            ad_format: "VIDEO_RESPONSIVE".to_string(),
            headline: Some("Short".to_string()),
            description: Some("Longer pitch".to_string()),
            ..Default::default()
        };
        let op = video_ad_operation(CID, &spec).unwrap();
        match &op {
            MutateOperation::AdGroupAd(inner) => {
                let ad = inner.payload().ad.as_ref().unwrap();
                let responsive = ad.video_responsive_ad.as_ref().unwrap();
                assert_eq!(responsive.headlines[0].text, "Short");
                assert_eq!(responsive.long_headlines[0].text, "Longer pitch");
                assert!(ad.video_ad.as_ref().unwrap().in_stream.is_none());
            }
            other => panic!("expected ad group ad operation, got {:?}", other),
        }
    }

    #[test]
    fn test_video_ad_unknown_format_fails() {
        let spec = VideoAdSpec {
            ad_group_id: "555".to_string(),
            video_asset_id: "800".to_string(),
            ad_format: "OUT_STREAM".to_string(),
            ..Default::default()
        };
        assert!(video_ad_operation(CID, &spec).is_err());
    }

    #[test]
    fn test_demand_gen_ad_assembles_all_assets() {
        let spec = DemandGenAdSpec {
            ad_group_id: "555".to_string(),
            headlines: strings(&["H1", "H2"]),
            descriptions: strings(&["D1"]),
            marketing_image_asset_ids: strings(&["900"]),
            logo_asset_id: "950".to_string(),
            business_name: "Acme".to_string(),
            final_urls: strings(&["https://example.com"]),
            call_to_action: Some("Shop now".to_string()),
        };
        let op = demand_gen_ad_operation(CID, &spec);
        match &op {
            MutateOperation::AdGroupAd(inner) => {
                let dg = inner
                    .payload()
                    .ad
                    .as_ref()
                    .unwrap()
                    .demand_gen_multi_asset_ad
                    .as_ref()
                    .unwrap();
                assert_eq!(dg.headlines.len(), 2);
                assert_eq!(dg.logo_images[0].asset, "customers/1234567890/assets/950");
                assert_eq!(dg.call_to_action_text.as_deref(), Some("Shop now"));
            }
            other => panic!("expected ad group ad operation, got {:?}", other),
        }
    }
}
