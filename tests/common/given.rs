use lasso_select::{Candidate, ObjectId, Polygon, glam::*};

pub fn polygon(points: &[(f32, f32)]) -> Polygon {
    points.iter().map(|&(x, y)| vec2(x, y)).collect()
}

pub fn square() -> Polygon {
    polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
}

pub fn bowtie() -> Polygon {
    polygon(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)])
}

pub fn pentagram() -> Polygon {
    polygon(&[
        (50.0, 100.0),
        (80.0, 0.0),
        (0.0, 60.0),
        (100.0, 60.0),
        (20.0, 0.0),
    ])
}

pub fn object(id: u64, x: f32, y: f32) -> Candidate {
    Candidate::new(ObjectId(id), vec2(x, y))
}

/// The clicks drawing [`square`] and closing it back at the origin.
pub fn square_lasso_clicks() -> Vec<Vec2> {
    vec![
        vec2(0.0, 0.0),
        vec2(10.0, 0.0),
        vec2(10.0, 10.0),
        vec2(0.0, 10.0),
        vec2(0.0, 0.0),
    ]
}
