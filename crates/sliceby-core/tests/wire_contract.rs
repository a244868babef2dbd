//! Wire-format tests for the slice-by response types.
//!
//! These decode bodies the way the slicing service actually sends them.

use sliceby_core::{DataPanelRows, SliceByInfo, SliceKey};

#[test]
fn info_keys_length_matches_n_slices() {
    let bodies = [
        r#"{"id":"a","type":"GroupBy","n_slices":0,"slice_keys":[]}"#,
        r#"{"id":"b","type":"SliceBy","n_slices":1,"slice_keys":[0]}"#,
        r#"{"id":"c","type":"ClusterBy","n_slices":4,"slice_keys":[0,1,2,3]}"#,
        r#"{"id":"d","type":"ExplainBy","n_slices":2,"slice_keys":["lo","hi"]}"#,
    ];

    for body in bodies {
        let info: SliceByInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.slice_keys.len(), info.n_slices, "body: {body}");
    }
}

#[test]
fn info_preserves_server_order() {
    let info: SliceByInfo = serde_json::from_str(
        r#"{"id":"sb","type":"GroupBy","n_slices":4,"slice_keys":["zebra",3,"apple",-1]}"#,
    )
    .unwrap();

    assert_eq!(
        info.slice_keys,
        vec![
            SliceKey::Label("zebra".to_string()),
            SliceKey::index(3),
            SliceKey::Label("apple".to_string()),
            SliceKey::index(-1),
        ]
    );
}

#[test]
fn info_accepts_any_json_number_as_key() {
    let info: SliceByInfo = serde_json::from_str(
        r#"{"id":"sb","type":"GroupBy","n_slices":2,"slice_keys":[0.5, 1.0]}"#,
    )
    .unwrap();
    assert_eq!(info.slice_keys.len(), 2);
    assert!(info.slice_keys.iter().all(|key| key.as_number().is_some()));

    let info: SliceByInfo = serde_json::from_str(
        r#"{"id":"sb","type":"GroupBy","n_slices":1,"slice_keys":[18446744073709551615]}"#,
    )
    .unwrap();
    assert_eq!(info.slice_keys[0].to_string(), "18446744073709551615");
}

#[test]
fn info_ignores_unknown_fields() {
    let info: SliceByInfo = serde_json::from_str(
        r#"{"id":"sb","type":"GroupBy","n_slices":1,"slice_keys":["x"],"extra":{"a":1}}"#,
    )
    .unwrap();
    assert_eq!(info.id, "sb");
}

#[test]
fn info_rejects_wrong_types() {
    let bodies = [
        r#"{"id":7,"type":"GroupBy","n_slices":1,"slice_keys":["x"]}"#,
        r#"{"id":"sb","type":"GroupBy","n_slices":-1,"slice_keys":["x"]}"#,
        r#"{"id":"sb","type":"GroupBy","n_slices":1,"slice_keys":"x"}"#,
        r#"{"id":"sb","type":"GroupBy","n_slices":1,"slice_keys":[null]}"#,
    ];

    for body in bodies {
        assert!(
            serde_json::from_str::<SliceByInfo>(body).is_err(),
            "should reject: {body}"
        );
    }
}

#[test]
fn rows_decode_mixed_cells() {
    let rows: DataPanelRows = serde_json::from_str(
        r#"{
            "column_infos": [
                {"name": "pk", "type": "ScalarColumn", "cell_component": "basic", "cell_props": null},
                {"name": "img", "type": "ImageColumn", "cell_component": "image", "cell_props": {"thumbnail": true}}
            ],
            "rows": [[0, "data:image/png;base64,AAA"], [1, null]],
            "full_length": 2,
            "primary_key": "pk"
        }"#,
    )
    .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows.column_infos[1].cell_props["thumbnail"], true);
    assert!(rows.rows[1][1].is_null());
}
