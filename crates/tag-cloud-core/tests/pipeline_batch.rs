use tag_cloud_core::prelude::*;
use tag_cloud_core::layout_into;

fn cfg() -> LayouterConfig {
    LayouterConfig::builder().center(500, 500).step(10).build()
}

#[test]
fn rejected_items_are_reported_and_skipped() {
    let items = vec![
        LayoutItem::new("alpha", 40, 12),
        LayoutItem::new("broken", 0, 12),
        LayoutItem::new("gamma", 25, 10),
        LayoutItem::new("negative", 10, -1),
    ];
    let cloud = layout_items(items, cfg()).expect("layout should succeed");

    let keys: Vec<&str> = cloud.placements.iter().map(|p| p.key).collect();
    assert_eq!(keys, vec!["alpha", "gamma"]);

    assert_eq!(cloud.rejected.len(), 2);
    assert_eq!(cloud.rejected[0].index, 1);
    assert_eq!(cloud.rejected[0].key, "broken");
    assert!(cloud.rejected[0].reason.contains("width must be"));
    assert_eq!(cloud.rejected[1].index, 3);
    assert_eq!(cloud.rejected[1].size, Size::new(10, -1));
}

#[test]
fn batch_matches_one_by_one_layout() {
    let sizes = [(30, 10), (12, 40), (8, 8), (60, 20)];
    let cloud = layout_sizes(
        sizes.iter().enumerate().map(|(i, (w, h))| (i, *w, *h)).collect(),
        cfg(),
    )
    .expect("layout should succeed");

    let mut layouter = CircularCloudLayouter::with_config(cfg()).expect("valid config");
    for (p, (w, h)) in cloud.placements.iter().zip(sizes) {
        let r = layouter.put_next_rectangle(Size::new(w, h)).expect("valid size");
        assert_eq!(p.rect, r);
    }
    assert_eq!(cloud.center, Point::new(500, 500));
    assert_eq!(cloud.step, 10);
}

#[test]
fn empty_input_is_an_error() {
    let items: Vec<LayoutItem<String>> = vec![];
    match layout_items(items, cfg()) {
        Err(CloudError::Empty) => {}
        other => panic!("Expected Empty error, got {other:?}"),
    }
}

#[test]
fn invalid_config_is_an_error() {
    let bad = LayouterConfig::builder().step(-1).build();
    let result = layout_items(vec![LayoutItem::new("a", 1, 1)], bad);
    assert!(matches!(result, Err(CloudError::InvalidConfig(_))));
}

#[test]
fn batches_can_be_appended() {
    let mut layouter = CircularCloudLayouter::with_config(cfg()).expect("valid config");
    let first = layout_into(&mut layouter, vec![LayoutItem::new("a", 20, 20)]);
    let second = layout_into(
        &mut layouter,
        vec![LayoutItem::new("b", 20, 20), LayoutItem::new("c", 5, 5)],
    );
    assert_eq!(first.placements.len(), 1);
    assert_eq!(second.placements.len(), 2);
    assert_eq!(layouter.len(), 3);
    assert!(!first.placements[0].rect.intersects(&second.placements[0].rect));
}

#[test]
fn cloud_roundtrips_through_json() {
    let cloud = layout_items(
        vec![LayoutItem::new("x".to_string(), 10, 10), LayoutItem::new("y".to_string(), 0, 1)],
        cfg(),
    )
    .expect("layout should succeed");
    let text = serde_json::to_string(&cloud).expect("serialize");
    let back: Cloud<String> = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back.placements[0].rect, cloud.placements[0].rect);
    assert_eq!(back.rejected.len(), 1);
}
