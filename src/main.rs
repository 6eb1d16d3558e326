use log::{info, warn};
use serde::Serialize;

use tagcurve::desc::parse_simplify_json;
use tagcurve::geom::Coord;
use tagcurve::logging::init_logger;
use tagcurve::paths::{IntPaths, int_path_from_curve};
use tagcurve::simplify::simplify_curve;

const TEST_JSON: &str = r#"
    {
        "tolerance": 1.5,
        "curves": [
            {
                "name": "coastline",
                "verts": [0,0, 5,1, 10,0, 15,1, 20,0, 25,8, 30,0, 35,1, 40,0]
            },
            {
                "name": "square_with_mid_start",
                "verts": [50,0, 100,0, 100,100, 0,100, 0,0],
                "is_ring": true
            },
            {
                "name": "notched_field",
                "verts": [0,0, 40,0, 40,20, 41,21, 40,22, 40,40, 0,40],
                "is_ring": true,
                "minimum_size": 4
            },
            {
                "name": "speck",
                "verts": [0,0, 0.5,0, 0.5,0.5],
                "is_ring": true,
                "minimum_size": 0
            }
        ]
    }
"#;

#[derive(Serialize)]
struct CurveReport<'a> {
    name: &'a str,
    original: usize,
    simplified: Option<usize>,
    coords: Vec<Coord>,
}

fn main() {
    init_logger();

    let desc = parse_simplify_json(TEST_JSON).expect("Failed to parse simplify JSON");
    info!("simplifying {} curves at tolerance {}", desc.curves.len(), desc.tolerance);

    for curve_desc in &desc.curves {
        let curve = match curve_desc.to_curve() {
            Ok(curve) => curve,
            Err(e) => {
                warn!("skipping {}: {e}", curve_desc.name);
                continue;
            }
        };

        let simplified = match simplify_curve(&curve, desc.tolerance, curve_desc.minimum_size()) {
            Ok(simplified) => simplified,
            Err(e) => {
                warn!("failed to simplify {}: {e}", curve_desc.name);
                continue;
            }
        };

        if curve.is_ring() {
            // clipper2's own simplification, for comparison.
            let reference = IntPaths::new(vec![int_path_from_curve(&curve)])
                .simplify(desc.tolerance, false);
            let n: Vec<usize> = reference.iter().map(|p| p.len()).collect();
            info!("{}: clipper2 keeps {:?} points", curve_desc.name, n);
        }

        let report = CurveReport {
            name: &curve_desc.name,
            original: curve.len(),
            simplified: simplified.as_ref().map(|c| c.len()),
            coords: simplified.map(|c| c.into_coords()).unwrap_or_default(),
        };
        println!(
            "{}",
            serde_json::to_string(&report).expect("report serializes")
        );
    }
}
