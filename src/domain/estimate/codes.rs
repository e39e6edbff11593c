//! Fixed code sets shared by pricing and persistence.
//!
//! The numeric codes are the keys of the rate tables (`package_contents`,
//! `optional_services`) and of the customer link rows, so they must never be
//! renumbered.

use serde::{Deserialize, Serialize};

use super::model::PrefectureId;

/// Category of item being moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageType {
    Box,
    Bed,
    Bicycle,
    WashingMachine,
}

impl PackageType {
    pub const ALL: [PackageType; 4] = [
        PackageType::Box,
        PackageType::Bed,
        PackageType::Bicycle,
        PackageType::WashingMachine,
    ];

    pub fn code(&self) -> i32 {
        match self {
            Self::Box => 1,
            Self::Bed => 2,
            Self::Bicycle => 3,
            Self::WashingMachine => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Box => "段ボール",
            Self::Bed => "ベッド",
            Self::Bicycle => "自転車",
            Self::WashingMachine => "洗濯機",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Box => write!(f, "BOX"),
            Self::Bed => write!(f, "BED"),
            Self::Bicycle => write!(f, "BICYCLE"),
            Self::WashingMachine => write!(f, "WASHING_MACHINE"),
        }
    }
}

/// Chargeable add-on or regional surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionalServiceType {
    /// Washing machine installation at the destination
    WashingMachineInstall,
    /// Move starting or ending in Hokkaido
    Hokkaido,
    /// Move starting or ending in Iwate
    Iwate,
    /// Move starting or ending in Fukushima
    Fukushima,
}

impl OptionalServiceType {
    pub const ALL: [OptionalServiceType; 4] = [
        OptionalServiceType::WashingMachineInstall,
        OptionalServiceType::Hokkaido,
        OptionalServiceType::Iwate,
        OptionalServiceType::Fukushima,
    ];

    pub fn code(&self) -> i32 {
        match self {
            Self::WashingMachineInstall => 1,
            Self::Hokkaido => 2,
            Self::Iwate => 3,
            Self::Fukushima => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WashingMachineInstall => "洗濯機取り付け",
            Self::Hokkaido => "北海道",
            Self::Iwate => "岩手",
            Self::Fukushima => "福島",
        }
    }

    /// Prefecture whose appearance as origin or destination triggers this
    /// surcharge. `None` for services the customer opts into.
    pub fn trigger_prefecture(&self) -> Option<&'static str> {
        match self {
            Self::WashingMachineInstall => None,
            Self::Hokkaido => Some(PrefectureId::HOKKAIDO),
            Self::Iwate => Some(PrefectureId::IWATE),
            Self::Fukushima => Some(PrefectureId::FUKUSHIMA),
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for OptionalServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WashingMachineInstall => write!(f, "WASHING_MACHINE_INSTALL"),
            Self::Hokkaido => write!(f, "HOKKAIDO_SURCHARGE"),
            Self::Iwate => write!(f, "IWATE_SURCHARGE"),
            Self::Fukushima => write!(f, "FUKUSHIMA_SURCHARGE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_codes_are_stable() {
        let codes: Vec<i32> = PackageType::ALL.iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);
        assert_eq!(PackageType::from_code(2), Some(PackageType::Bed));
        assert_eq!(PackageType::from_code(9), None);
    }

    #[test]
    fn optional_service_codes_and_labels() {
        assert_eq!(OptionalServiceType::WashingMachineInstall.code(), 1);
        assert_eq!(OptionalServiceType::Fukushima.code(), 4);
        assert_eq!(OptionalServiceType::Hokkaido.label(), "北海道");
        assert_eq!(
            OptionalServiceType::from_code(3),
            Some(OptionalServiceType::Iwate)
        );
    }

    #[test]
    fn regional_surcharge_prefectures() {
        assert_eq!(OptionalServiceType::WashingMachineInstall.trigger_prefecture(), None);
        assert_eq!(OptionalServiceType::Hokkaido.trigger_prefecture(), Some("01"));
        assert_eq!(OptionalServiceType::Iwate.trigger_prefecture(), Some("03"));
        assert_eq!(OptionalServiceType::Fukushima.trigger_prefecture(), Some("07"));
    }

    #[test]
    fn display_names() {
        assert_eq!(PackageType::WashingMachine.to_string(), "WASHING_MACHINE");
        assert_eq!(OptionalServiceType::Iwate.to_string(), "IWATE_SURCHARGE");
    }
}
