use mapbound::prelude::*;

/// Plans a static map image for a drawn boundary without any UI or network
fn main() -> mapbound::Result<()> {
    println!("mapbound boundary planning");
    println!("==========================");

    // Boundary as a drawing widget would submit it
    let drawn = [
        LatLng::new(37.80855, -122.47755),
        LatLng::new(37.81142, -122.47098),
        LatLng::new(37.80613, -122.46502),
        LatLng::new(37.80241, -122.47281),
    ];
    let encoded = encode_polyline(&drawn);
    println!("Encoded boundary: {}", encoded);

    let bounds = bounds_from_points(&decode_polyline(&encoded));
    let [south, west, north, east] = bounds.to_array();
    println!("Bounds: S {south:.5} W {west:.5} N {north:.5} E {east:.5}");

    for profile in [StaticMapProfile::Standard, StaticMapProfile::Preview] {
        let options = profile.resolve();
        let Some(request) = StaticMapRequest::plan(&encoded, &options) else {
            continue;
        };

        println!("\n{:?} ({} @{}x):", profile, options.size, options.scale);
        if let Some(fit) = request.view {
            println!("   Center: {}", fit.center.display_fixed(6));
            println!("   Zoom: {}", fit.zoom);
            println!(
                "   Naive lat/lng midpoint would be: {}",
                bounds.center().display_fixed(6)
            );
        }
        let url = request.to_url(&GoogleStaticMaps::new(), "YOUR_API_KEY")?;
        println!("   URL: {}", url);
    }

    Ok(())
}
