//! Property tests for the codec, projection, bounds and zoom fitter.

use mapbound::prelude::*;
use proptest::prelude::*;

fn lat() -> impl Strategy<Value = f64> {
    -90.0..=90.0_f64
}

fn lng() -> impl Strategy<Value = f64> {
    -180.0..=180.0_f64
}

fn rounded_path() -> impl Strategy<Value = Vec<LatLng>> {
    prop::collection::vec((lat(), lng()), 0..40).prop_map(|coords| {
        coords
            .into_iter()
            .map(|(lat, lng)| LatLng::new(lat, lng).rounded())
            .collect()
    })
}

proptest! {
    #[test]
    fn polyline_round_trips_rounded_paths(path in rounded_path()) {
        let decoded = decode_polyline(&encode_polyline(&path));
        prop_assert_eq!(decoded, path);
    }

    #[test]
    fn encoded_polyline_is_printable_ascii(path in rounded_path()) {
        let encoded = encode_polyline(&path);
        prop_assert!(encoded.bytes().all(|b| (63..=126).contains(&b)));
    }

    #[test]
    fn decode_never_panics(input in "\\PC{0,64}") {
        let _ = decode_polyline(&input);
    }

    #[test]
    fn longitude_projection_inverts(lng in lng(), zoom in 0u8..=20) {
        let back = pixel_x_to_lng(lng_to_pixel_x(lng, zoom), zoom);
        prop_assert!((back - lng).abs() < 1e-6, "{} -> {}", lng, back);
    }

    #[test]
    fn latitude_projection_inverts(lat in -MAX_LATITUDE..=MAX_LATITUDE, zoom in 0u8..=20) {
        let back = pixel_y_to_lat(lat_to_pixel_y(lat, zoom), zoom);
        prop_assert!((back - lat).abs() < 1e-6, "{} -> {}", lat, back);
    }

    #[test]
    fn projection_stays_inside_world(lat in -1000.0..1000.0_f64, lng in -1000.0..1000.0_f64, zoom in 0u8..=20) {
        let size = world_size(zoom);
        let x = lng_to_pixel_x(lng, zoom);
        let y = lat_to_pixel_y(lat, zoom);
        prop_assert!((0.0..=size).contains(&x));
        prop_assert!(y > -1e-6 && y < size + 1e-6);
    }

    #[test]
    fn bounds_contain_every_point(path in prop::collection::vec((lat(), lng()), 1..40)) {
        let points: Vec<LatLng> = path.into_iter().map(LatLng::from).collect();
        let bounds = bounds_from_points(&points);
        prop_assert!(bounds.is_valid());
        for point in &points {
            prop_assert!(bounds.contains(point));
        }
    }

    #[test]
    fn larger_boxes_never_zoom_closer(
        south in -60.0..60.0_f64,
        west in -170.0..0.0_f64,
        height in 0.0001..20.0_f64,
        width in 0.0001..80.0_f64,
        grow in 0.0..20.0_f64,
        pad in 0u32..200,
    ) {
        let inner = LatLngBounds::from_coords(south, west, south + height, west + width);
        let outer = LatLngBounds::from_coords(
            south - grow,
            west - grow,
            south + height + grow,
            west + width + grow,
        );
        let inner_zoom = compute_zoom_for_bounds(&inner, 1280, 960, pad);
        let outer_zoom = compute_zoom_for_bounds(&outer, 1280, 960, pad);
        prop_assert!(outer_zoom <= inner_zoom);
    }

    #[test]
    fn fitted_zoom_is_tightest(
        south in -60.0..60.0_f64,
        west in -170.0..0.0_f64,
        height in 0.001..20.0_f64,
        width in 0.001..80.0_f64,
    ) {
        let bounds = LatLngBounds::from_coords(south, west, south + height, west + width);
        let viewport = Viewport::new(1280, 1280, 100);
        let zoom = compute_zoom_for_bounds(&bounds, 1280, 1280, 100);
        prop_assert!(zoom <= MAX_ZOOM);
        if viewport.fits(&bounds, 0) {
            prop_assert!(viewport.fits(&bounds, zoom));
        }
        if zoom < MAX_ZOOM {
            prop_assert!(!viewport.fits(&bounds, zoom + 1));
        }
    }
}
