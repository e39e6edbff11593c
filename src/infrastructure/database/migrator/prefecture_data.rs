//! Prefecture master data used to seed the rate tables

/// (code, name, latitude, longitude of the prefectural office)
pub const PREFECTURES: [(&str, &str, f64, f64); 47] = [
    ("01", "北海道", 43.064, 141.347),
    ("02", "青森県", 40.824, 140.740),
    ("03", "岩手県", 39.704, 141.153),
    ("04", "宮城県", 38.269, 140.872),
    ("05", "秋田県", 39.719, 140.102),
    ("06", "山形県", 38.240, 140.364),
    ("07", "福島県", 37.750, 140.468),
    ("08", "茨城県", 36.342, 140.447),
    ("09", "栃木県", 36.566, 139.884),
    ("10", "群馬県", 36.391, 139.061),
    ("11", "埼玉県", 35.857, 139.649),
    ("12", "千葉県", 35.605, 140.123),
    ("13", "東京都", 35.690, 139.692),
    ("14", "神奈川県", 35.448, 139.643),
    ("15", "新潟県", 37.902, 139.023),
    ("16", "富山県", 36.695, 137.211),
    ("17", "石川県", 36.594, 136.626),
    ("18", "福井県", 36.065, 136.222),
    ("19", "山梨県", 35.664, 138.568),
    ("20", "長野県", 36.651, 138.181),
    ("21", "岐阜県", 35.391, 136.722),
    ("22", "静岡県", 34.977, 138.383),
    ("23", "愛知県", 35.180, 136.907),
    ("24", "三重県", 34.730, 136.509),
    ("25", "滋賀県", 35.004, 135.868),
    ("26", "京都府", 35.021, 135.756),
    ("27", "大阪府", 34.686, 135.520),
    ("28", "兵庫県", 34.691, 135.183),
    ("29", "奈良県", 34.685, 135.833),
    ("30", "和歌山県", 34.226, 135.168),
    ("31", "鳥取県", 35.504, 134.238),
    ("32", "島根県", 35.472, 133.051),
    ("33", "岡山県", 34.662, 133.935),
    ("34", "広島県", 34.397, 132.460),
    ("35", "山口県", 34.186, 131.471),
    ("36", "徳島県", 34.066, 134.559),
    ("37", "香川県", 34.340, 134.043),
    ("38", "愛媛県", 33.842, 132.766),
    ("39", "高知県", 33.560, 133.531),
    ("40", "福岡県", 33.607, 130.418),
    ("41", "佐賀県", 33.249, 130.299),
    ("42", "長崎県", 32.745, 129.874),
    ("43", "熊本県", 32.790, 130.742),
    ("44", "大分県", 33.238, 131.613),
    ("45", "宮崎県", 31.911, 131.424),
    ("46", "鹿児島県", 31.560, 130.558),
    ("47", "沖縄県", 26.212, 127.681),
];

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres, rounded to 0.1 km
pub fn great_circle_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = (from.0.to_radians(), from.1.to_radians());
    let (lat2, lon2) = (to.0.to_radians(), to.1.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let km = 2.0 * EARTH_RADIUS_KM * a.sqrt().asin();

    (km * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(code: &str) -> (f64, f64) {
        let (_, _, lat, lon) = PREFECTURES.iter().find(|p| p.0 == code).copied().unwrap();
        (lat, lon)
    }

    #[test]
    fn codes_are_sequential() {
        for (i, (code, _, _, _)) in PREFECTURES.iter().enumerate() {
            assert_eq!(*code, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn tokyo_osaka_distance() {
        let km = great_circle_km(coords("13"), coords("27"));
        assert!((390.0..410.0).contains(&km), "got {}", km);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = coords("01");
        let b = coords("47");
        assert_eq!(great_circle_km(a, b), great_circle_km(b, a));
        assert_eq!(great_circle_km(a, a), 0.0);
    }
}
