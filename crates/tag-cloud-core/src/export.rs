use crate::model::Cloud;
use serde::Serialize;
use serde_json::{json, Value};

/// Serialize the whole `Cloud` as `{ center, step, placements, rejected, stats }`.
/// Placements keep request order, which is also the order a renderer should draw them in.
pub fn to_json_array<K: ToString + Serialize>(cloud: &Cloud<K>) -> Value {
    let placements: Vec<Value> = cloud
        .placements
        .iter()
        .map(|p| {
            json!({
                "key": p.key.to_string(),
                "x": p.rect.x,
                "y": p.rect.y,
                "w": p.rect.w,
                "h": p.rect.h,
            })
        })
        .collect();
    json!({
        "center": cloud.center,
        "step": cloud.step,
        "placements": placements,
        "rejected": &cloud.rejected,
        "stats": cloud.stats(),
    })
}

/// Placements keyed by name with their draw order.
/// Shape: `{ placements: { name: { x, y, w, h, order } }, center, stats }`.
/// Duplicate keys keep the last placement.
pub fn to_json_hash<K: ToString>(cloud: &Cloud<K>) -> Value {
    let mut placements = serde_json::Map::new();
    for (order, p) in cloud.placements.iter().enumerate() {
        placements.insert(
            p.key.to_string(),
            json!({
                "x": p.rect.x,
                "y": p.rect.y,
                "w": p.rect.w,
                "h": p.rect.h,
                "order": order,
            }),
        );
    }
    json!({ "placements": placements, "center": cloud.center, "stats": cloud.stats() })
}
