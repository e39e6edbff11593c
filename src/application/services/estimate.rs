//! Estimate service: pricing, the box-limit gate and order registration

use std::sync::Arc;

use tracing::{error, info, warn};
use validator::Validate;

use crate::domain::customer::{
    CustomerId, CustomerOptionService, CustomerPackage, NewCustomer, OrderTransaction,
};
use crate::domain::estimate::pricing;
use crate::domain::{
    DomainError, DomainResult, OptionalServiceType, OrderRequest, PriceBreakdown,
    RepositoryProvider, MAX_BOX_COUNT,
};

/// Service for moving estimates
pub struct EstimateService {
    repos: Arc<dyn RepositoryProvider>,
}

impl EstimateService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Price in yen for an order. Inputs are trusted; a missing rate is fatal.
    pub async fn compute_price(&self, order: &OrderRequest) -> DomainResult<i32> {
        pricing::compute_price(order, self.repos.rates()).await
    }

    /// Itemised version of `compute_price`
    pub async fn estimate(&self, order: &OrderRequest) -> DomainResult<PriceBreakdown> {
        pricing::estimate(order, self.repos.rates()).await
    }

    /// True when the order needs more than 200 box-equivalents
    pub async fn exceeds_box_limit(&self, order: &OrderRequest) -> DomainResult<bool> {
        pricing::exceeds_box_limit(order, self.repos.rates()).await
    }

    /// Gate for the request layer: field validation, then the box limit.
    /// Neither pricing nor registration runs this on its own.
    pub async fn check_order(&self, order: &OrderRequest) -> DomainResult<()> {
        order.validate()?;

        let box_count = pricing::total_box_count(order, self.repos.rates()).await?;
        if box_count > MAX_BOX_COUNT {
            return Err(DomainError::BoxLimitExceeded {
                count: box_count,
                limit: MAX_BOX_COUNT,
            });
        }
        Ok(())
    }

    /// Persist the customer, the washing-machine option and four package
    /// lines in one transaction. Any failure rolls back every write and the
    /// original error is returned.
    pub async fn register_order(&self, order: &OrderRequest) -> DomainResult<CustomerId> {
        let mut tx = self.repos.orders().begin().await?;

        match Self::write_order(tx.as_mut(), order).await {
            Ok(customer_id) => {
                tx.commit().await?;
                info!(
                    "Order registered: customer {} ({} → {})",
                    customer_id, order.old_prefecture_id, order.new_prefecture_id
                );
                Ok(customer_id)
            }
            Err(e) => {
                warn!("Order registration failed, rolling back: {}", e);
                if let Err(rollback_err) = tx.rollback().await {
                    error!("Rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    async fn write_order(
        tx: &mut dyn OrderTransaction,
        order: &OrderRequest,
    ) -> DomainResult<CustomerId> {
        let customer_id = tx.insert_customer(NewCustomer::from_order(order)).await?;

        if order.washing_machine_installation {
            tx.insert_optional_service(CustomerOptionService {
                customer_id,
                service: OptionalServiceType::WashingMachineInstall,
            })
            .await?;
        }

        tx.batch_insert_packages(CustomerPackage::lines_for(customer_id, order))
            .await?;

        Ok(customer_id)
    }
}

// ── Tests ──────────────────────────────────────────────────────
