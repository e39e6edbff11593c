//! Estimate domain entities

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::codes::{OptionalServiceType, PackageType};
use crate::domain::{DomainError, DomainResult};
use crate::shared::validations::{validate_season, validate_tel};

/// Yen charged per whole kilometre travelled
pub const PRICE_PER_KILOMETER: i32 = 100;

/// Largest box-equivalent count a single order may carry
pub const MAX_BOX_COUNT: i32 = 200;

// ── PrefectureId ───────────────────────────────────────────────

/// Two-digit prefecture code ("01" Hokkaido .. "47" Okinawa)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrefectureId(String);

impl PrefectureId {
    pub const HOKKAIDO: &'static str = "01";
    pub const IWATE: &'static str = "03";
    pub const FUKUSHIMA: &'static str = "07";

    pub fn parse(code: &str) -> DomainResult<Self> {
        let valid = code.len() == 2
            && code.bytes().all(|b| b.is_ascii_digit())
            && matches!(code.parse::<u8>(), Ok(1..=47));

        if valid {
            Ok(Self(code.to_string()))
        } else {
            Err(DomainError::Validation(format!(
                "invalid prefecture id '{}'",
                code
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PrefectureId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PrefectureId> for String {
    fn from(id: PrefectureId) -> Self {
        id.0
    }
}

impl std::str::FromStr for PrefectureId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PrefectureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Season ─────────────────────────────────────────────────────

/// Season classification of the moving date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// Code "0", March/April peak
    Busiest,
    /// Code "1"
    Busy,
    /// Any other code
    Regular,
}

impl Season {
    /// Unrecognised codes fall back to `Regular`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "0" => Self::Busiest,
            "1" => Self::Busy,
            _ => Self::Regular,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Busiest => "0",
            Self::Busy => "1",
            Self::Regular => "2",
        }
    }

    pub fn coefficient(&self) -> f64 {
        match self {
            Self::Busiest => 1.5,
            Self::Busy => 1.2,
            Self::Regular => 1.0,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Busiest => write!(f, "Busiest"),
            Self::Busy => write!(f, "Busy"),
            Self::Regular => write!(f, "Regular"),
        }
    }
}

// ── OrderRequest ───────────────────────────────────────────────

/// Customer's moving order as submitted from the estimate form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderRequest {
    #[validate(length(min = 1, max = 60, message = "customer name is required"))]
    pub customer_name: String,
    #[validate(custom(function = "validate_tel"))]
    pub tel: String,
    #[validate(email(message = "email is not a valid address"))]
    pub email: String,
    pub old_prefecture_id: PrefectureId,
    #[validate(length(min = 1, max = 200, message = "origin address is required"))]
    pub old_address: String,
    pub new_prefecture_id: PrefectureId,
    #[validate(length(min = 1, max = 200, message = "destination address is required"))]
    pub new_address: String,
    #[validate(custom(function = "validate_season"))]
    pub season: String,
    #[serde(rename = "box")]
    #[validate(range(min = 0, message = "box must be non-negative"))]
    pub box_count: i32,
    #[validate(range(min = 0, message = "bed must be non-negative"))]
    pub bed: i32,
    #[validate(range(min = 0, message = "bicycle must be non-negative"))]
    pub bicycle: i32,
    #[validate(range(min = 0, message = "washing_machine must be non-negative"))]
    pub washing_machine: i32,
    #[serde(default)]
    pub washing_machine_installation: bool,
}

impl OrderRequest {
    pub fn package_count(&self, package: PackageType) -> i32 {
        match package {
            PackageType::Box => self.box_count,
            PackageType::Bed => self.bed,
            PackageType::Bicycle => self.bicycle,
            PackageType::WashingMachine => self.washing_machine,
        }
    }

    pub fn season(&self) -> Season {
        Season::from_code(&self.season)
    }

    /// Whether the move starts or ends in the given prefecture
    pub fn touches(&self, prefecture: &str) -> bool {
        self.old_prefecture_id.as_str() == prefecture
            || self.new_prefecture_id.as_str() == prefecture
    }

    /// Optional services this order is charged for, in code order.
    /// Regional surcharges are independent of each other.
    pub fn optional_services(&self) -> Vec<OptionalServiceType> {
        OptionalServiceType::ALL
            .into_iter()
            .filter(|service| match service {
                OptionalServiceType::WashingMachineInstall => self.washing_machine_installation,
                OptionalServiceType::Hokkaido
                | OptionalServiceType::Iwate
                | OptionalServiceType::Fukushima => service
                    .trigger_prefecture()
                    .is_some_and(|prefecture| self.touches(prefecture)),
            })
            .collect()
    }
}

// ── PriceBreakdown ─────────────────────────────────────────────

/// Itemised estimate; `total` is the price quoted to the customer
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    /// Distance truncated to whole kilometres
    pub distance_km: i32,
    pub distance_cost: i32,
    /// Box-equivalents across all package types
    pub box_count: i32,
    pub truck_price: i32,
    pub season: Season,
    pub season_coefficient: f64,
    /// floor((distance_cost + truck_price) × season_coefficient)
    pub seasonal_subtotal: i32,
    pub optional_services: Vec<(OptionalServiceType, i32)>,
    pub optional_service_price: i32,
    pub total: i32,
}

impl PriceBreakdown {
    /// Combine looked-up rates into the final price.
    ///
    /// Optional-service prices are added after the seasonal floor and are
    /// never scaled by the season coefficient.
    pub fn calculate(
        distance: f64,
        box_count: i32,
        truck_price: i32,
        season: Season,
        optional_services: Vec<(OptionalServiceType, i32)>,
    ) -> Self {
        let distance_km = distance.floor() as i32;
        let distance_cost = distance_km * PRICE_PER_KILOMETER;

        let season_coefficient = season.coefficient();
        let seasonal_subtotal =
            (f64::from(distance_cost + truck_price) * season_coefficient).floor() as i32;

        let optional_service_price: i32 = optional_services.iter().map(|(_, price)| price).sum();

        Self {
            distance_km,
            distance_cost,
            box_count,
            truck_price,
            season,
            season_coefficient,
            seasonal_subtotal,
            optional_services,
            optional_service_price,
            total: seasonal_subtotal + optional_service_price,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
