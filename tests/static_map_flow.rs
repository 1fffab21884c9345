use mapbound::prelude::*;

/// Drawn boundary around a few blocks of lower Manhattan
fn drawn_boundary() -> Vec<LatLng> {
    vec![
        LatLng::new(40.71427, -74.00597),
        LatLng::new(40.71801, -74.00056),
        LatLng::new(40.71532, -73.99512),
        LatLng::new(40.71059, -73.99873),
        LatLng::new(40.70988, -74.00441),
    ]
}

#[test]
fn reference_scenarios() {
    let reference = [
        LatLng::new(38.5, -120.2),
        LatLng::new(40.7, -120.95),
        LatLng::new(43.252, -126.453),
    ];
    assert_eq!(encode_polyline(&reference), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");

    let bounds = bounds_from_points(&[
        LatLng::new(10.0, 20.0),
        LatLng::new(30.0, -5.0),
        LatLng::new(-2.0, 40.0),
    ]);
    assert_eq!(bounds.to_array(), [-2.0, -5.0, 30.0, 40.0]);

    assert_eq!(lng_to_pixel_x(0.0, 0), 128.0);

    let single = bounds_from_points(&[LatLng::new(5.0, 5.0)]);
    assert_eq!(single.to_array(), [5.0, 5.0, 5.0, 5.0]);
}

#[test]
fn ten_degree_box_fits_at_returned_zoom_only() {
    let bounds = LatLngBounds::from_coords(0.0, 0.0, 10.0, 10.0);
    let zoom = compute_zoom_for_bounds(&bounds, 1280, 1280, 100);

    let span = |z: u8| {
        (
            (lng_to_pixel_x(10.0, z) - lng_to_pixel_x(0.0, z)).abs(),
            (lat_to_pixel_y(0.0, z) - lat_to_pixel_y(10.0, z)).abs(),
        )
    };

    let (w, h) = span(zoom);
    assert!(w <= 1080.0 && h <= 1080.0);
    let (w, h) = span(zoom + 1);
    assert!(w > 1080.0 || h > 1080.0);
}

#[test]
fn drawn_boundary_produces_framed_request() {
    let encoded = encode_polyline(&drawn_boundary());
    let options = StaticMapProfile::Standard.resolve();
    let request = StaticMapRequest::plan(&encoded, &options).expect("non-empty input");

    assert_eq!(request.point_count, 5);
    let ring = Polyline::decode(&request.encoded_path);
    assert_eq!(ring.len(), 6);
    assert_eq!(ring.points()[0], ring.points()[5]);

    let fit = request.view.expect("boundary is zoom fittable");
    assert!(fit.zoom >= 14 && fit.zoom <= MAX_ZOOM);

    let bounds = request.bounds.unwrap();
    assert!(bounds.contains(&fit.center));
    // The fitted center must sit in the middle of the image in pixel space.
    let center = project(&fit.center, fit.zoom);
    let nw = project(&LatLng::new(bounds.north(), bounds.west()), fit.zoom);
    let se = project(&LatLng::new(bounds.south(), bounds.east()), fit.zoom);
    assert!((center.x - (nw.x + se.x) / 2.0).abs() < 1e-4);
    assert!((center.y - (nw.y + se.y) / 2.0).abs() < 1e-4);

    let url = request
        .to_url(&GoogleStaticMaps::new(), "test-key")
        .expect("valid url");
    let query = url.query().unwrap_or_default();
    assert!(query.starts_with("size=640x640&scale=2&maptype=hybrid&format=png&path="));
    assert!(query.contains("&key=test-key&center="));
    assert!(query.ends_with(&format!("&zoom={}", fit.zoom)));

    let link = request.maps_link(options.default_link_zoom).unwrap();
    assert!(link.starts_with("https://www.google.com/maps/@40.7"));
    assert!(link.ends_with(&format!(",{}z", fit.zoom)));
}

#[test]
fn antimeridian_boundary_is_left_unframed() {
    let encoded = encode_polyline(&[
        LatLng::new(-16.5, 179.5),
        LatLng::new(-17.5, -179.5),
        LatLng::new(-18.5, 179.0),
    ]);
    let request = StaticMapRequest::plan(&encoded, &StaticMapOptions::default()).unwrap();

    assert!(request.view.is_none());
    assert!(request.maps_link(15).is_none());
    let url = request.to_url(&GoogleStaticMaps::new(), "k").unwrap();
    assert!(!url.as_str().contains("center="));
    assert!(!url.as_str().contains("zoom="));
}

#[test]
fn options_from_json_drive_the_plan() {
    let options = StaticMapOptions::from_json(
        r#"{
            "size": "640x400",
            "scale": 2,
            "padding": 10,
            "map_type": "satellite",
            "format": "jpg",
            "path_style": { "color": "0x0000FF", "weight": 4 },
            "max_zoom": 15
        }"#,
    )
    .unwrap();

    let request = StaticMapRequest::plan(&encode_polyline(&drawn_boundary()), &options).unwrap();
    assert_eq!(request.zoom(), Some(15));
    assert!(request
        .path
        .starts_with("fillcolor:0x44FF0000|color:0x0000FF|weight:4|enc:"));

    let pairs = request.query_pairs();
    assert_eq!(pairs[0], ("size", "640x400".to_string()));
    assert_eq!(pairs[2], ("maptype", "satellite".to_string()));
    assert_eq!(pairs[3], ("format", "jpg".to_string()));
}
