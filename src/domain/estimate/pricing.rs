//! Price estimation over a rate repository

use tracing::debug;

use super::codes::PackageType;
use super::model::{OrderRequest, PriceBreakdown, MAX_BOX_COUNT};
use super::repository::RateRepository;
use crate::domain::DomainResult;

/// Box-equivalents of an order: Σ count × multiplier over every package type.
///
/// Saturates at `i32::MAX`, so an oversized order always exceeds the limit.
pub async fn total_box_count(order: &OrderRequest, rates: &dyn RateRepository) -> DomainResult<i32> {
    let mut total: i32 = 0;
    for package in PackageType::ALL {
        let multiplier = rates.box_multiplier_for_package_type(package).await?;
        total = total.saturating_add(order.package_count(package).saturating_mul(multiplier));
    }
    Ok(total)
}

/// True when the order needs more than `MAX_BOX_COUNT` box-equivalents
pub async fn exceeds_box_limit(order: &OrderRequest, rates: &dyn RateRepository) -> DomainResult<bool> {
    Ok(total_box_count(order, rates).await? > MAX_BOX_COUNT)
}

/// Itemised estimate for an order
pub async fn estimate(order: &OrderRequest, rates: &dyn RateRepository) -> DomainResult<PriceBreakdown> {
    let distance = rates
        .distance_between(&order.old_prefecture_id, &order.new_prefecture_id)
        .await?;

    let box_count = total_box_count(order, rates).await?;
    let truck_price = rates.truck_price_for_box_count(box_count).await?;

    let mut optional_services = Vec::new();
    for service in order.optional_services() {
        let price = rates.optional_service_price(service).await?;
        optional_services.push((service, price));
    }

    let breakdown = PriceBreakdown::calculate(
        distance,
        box_count,
        truck_price,
        order.season(),
        optional_services,
    );

    debug!(
        "Estimate {}→{}: distance={}km boxes={} truck={} season={} options={} total={}",
        order.old_prefecture_id,
        order.new_prefecture_id,
        breakdown.distance_km,
        breakdown.box_count,
        breakdown.truck_price,
        breakdown.season,
        breakdown.optional_service_price,
        breakdown.total
    );

    Ok(breakdown)
}

/// Price in yen quoted to the customer
pub async fn compute_price(order: &OrderRequest, rates: &dyn RateRepository) -> DomainResult<i32> {
    Ok(estimate(order, rates).await?.total)
}
