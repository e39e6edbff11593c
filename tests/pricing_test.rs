//! Pricing against the seeded SQLite rate tables

use moving_estimate::app::EstimateApp;
use moving_estimate::config::{AppConfig, DatabaseSection};
use moving_estimate::domain::{OrderRequest, PrefectureId};

async fn start_app(cache: bool) -> EstimateApp {
    let mut config = AppConfig {
        database: DatabaseSection {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        ..AppConfig::default()
    };
    config.rates.cache = cache;
    EstimateApp::start(config).await.unwrap()
}

fn order(from: &str, to: &str, season: &str) -> OrderRequest {
    OrderRequest {
        customer_name: "佐藤花子".into(),
        tel: "090-1234-5678".into(),
        email: "hanako@example.com".into(),
        old_prefecture_id: PrefectureId::parse(from).unwrap(),
        old_address: "新宿区3-3".into(),
        new_prefecture_id: PrefectureId::parse(to).unwrap(),
        new_address: "中央区4-4".into(),
        season: season.into(),
        // 10 + 15 + 5 + 10 = 40 boxes
        box_count: 10,
        bed: 1,
        bicycle: 1,
        washing_machine: 1,
        washing_machine_installation: false,
    }
}

#[tokio::test]
async fn tokyo_to_osaka_on_seeded_rates() {
    for cache in [false, true] {
        let app = start_app(cache).await;
        let o = order("13", "27", "2");

        let km = app
            .repos
            .rates()
            .distance_between(&o.old_prefecture_id, &o.new_prefecture_id)
            .await
            .unwrap();
        assert!(km > 350.0 && km < 450.0, "unexpected seed distance {}", km);

        let expected = km.floor() as i32 * 100 + 30000;
        assert_eq!(app.service.compute_price(&o).await.unwrap(), expected);

        // same answer on repeat, cached or not
        assert_eq!(app.service.compute_price(&o).await.unwrap(), expected);
        app.shutdown().await;
    }
}

#[tokio::test]
async fn direction_does_not_change_price() {
    let app = start_app(false).await;
    let there = app.service.compute_price(&order("13", "27", "1")).await.unwrap();
    let back = app.service.compute_price(&order("27", "13", "1")).await.unwrap();
    assert_eq!(there, back);
}

#[tokio::test]
async fn large_load_uses_bigger_truck() {
    let app = start_app(false).await;
    let mut o = order("13", "13", "2");
    o.box_count = 100;

    let bd = app.service.estimate(&o).await.unwrap();
    assert_eq!(bd.distance_cost, 0);
    assert_eq!(bd.box_count, 130);
    assert_eq!(bd.truck_price, 50000);
    assert_eq!(bd.total, 50000);
}

#[tokio::test]
async fn remote_regions_add_seeded_surcharges() {
    let app = start_app(false).await;
    let mut o = order("01", "07", "2");
    o.washing_machine_installation = true;

    let bd = app.service.estimate(&o).await.unwrap();
    // install 3000 + Hokkaido 10000 + Fukushima 5000
    assert_eq!(bd.optional_service_price, 18000);
    assert_eq!(bd.total, bd.seasonal_subtotal + 18000);
}

#[tokio::test]
async fn box_limit_on_seeded_multipliers() {
    let app = start_app(false).await;
    let mut o = order("13", "14", "2");

    // 170 + 15 + 5 + 10 = 200
    o.box_count = 170;
    assert!(!app.service.exceeds_box_limit(&o).await.unwrap());
    assert!(app.service.check_order(&o).await.is_ok());

    o.box_count = 171;
    assert!(app.service.exceeds_box_limit(&o).await.unwrap());
    assert!(app.service.check_order(&o).await.is_err());
}
