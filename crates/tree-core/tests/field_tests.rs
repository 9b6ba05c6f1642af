// Tests for one-shot particle and photo anchor generation.

use rand::prelude::*;
use tree_core::*;

fn field() -> ParticleField {
    ParticleField::generate(&mut StdRng::seed_from_u64(7))
}

#[test]
fn categories_have_fixed_counts() {
    let f = field();
    assert_eq!(f.categories.len(), 5);
    for cat in Category::ALL {
        let data = f.get(cat).expect("category generated");
        assert_eq!(data.len(), cat.count());
        assert_eq!(data.exploded.len(), cat.count());
        assert_eq!(data.colors.len(), cat.count());
        assert_eq!(data.scales.len(), cat.count());
    }
    assert_eq!(f.total(), 1450);
}

#[test]
fn assembled_positions_stay_within_tree_height() {
    for cat in &field().categories {
        for p in &cat.assembled {
            assert!(p.y >= -4.5 && p.y <= 4.5, "{:?} y={}", cat.category, p.y);
        }
    }
}

#[test]
fn assembled_positions_hug_the_cone() {
    for cat in &field().categories {
        let half_noise = cat.category.radial_noise() * 0.5 + 1e-4;
        for p in &cat.assembled {
            let r = (p.x * p.x + p.z * p.z).sqrt();
            let expected = cone_radius(p.y);
            assert!(
                (r - expected).abs() <= half_noise,
                "{:?} r={} expected={}",
                cat.category,
                r,
                expected
            );
        }
    }
}

#[test]
fn exploded_positions_lie_on_thick_shell() {
    for cat in &field().categories {
        for p in &cat.exploded {
            let r = p.length();
            assert!(r >= 4.0 - 1e-4 && r <= 10.0 + 1e-4, "radius {r}");
        }
    }
}

#[test]
fn cone_radius_shrinks_toward_apex() {
    assert!((cone_radius(-4.5) - 4.6).abs() < 1e-5);
    assert!((cone_radius(4.5) - 0.1).abs() < 1e-5);
    assert!(cone_radius(0.0) < cone_radius(-1.0));
}

#[test]
fn scales_follow_category_ranges() {
    for cat in &field().categories {
        let (lo, hi) = cat.category.scale_range();
        let (lo, hi) = (lo * GLOBAL_SCALE_SHRINK, hi * GLOBAL_SCALE_SHRINK);
        for i in 0..cat.len() {
            let s = cat.scales.get(i);
            if cat.category == Category::Gift {
                let (jlo, jhi) = (lo * 0.8 - 1e-5, hi * 1.2 + 1e-5);
                for v in [s.x, s.y, s.z] {
                    assert!(v >= jlo && v <= jhi, "gift axis {v}");
                }
            } else {
                assert_eq!(s.x, s.y);
                assert_eq!(s.y, s.z);
                assert!(s.x >= lo - 1e-5 && s.x <= hi + 1e-5, "{:?} {}", cat.category, s.x);
            }
        }
    }
}

#[test]
fn only_gifts_are_non_uniform() {
    for cat in &field().categories {
        let per_axis = matches!(cat.scales, ScaleBuffer::PerAxis(_));
        assert_eq!(per_axis, cat.category == Category::Gift);
    }
}

#[test]
fn colors_come_from_category_palette() {
    for cat in &field().categories {
        let palette: Vec<[f32; 3]> = cat
            .category
            .palette()
            .iter()
            .map(|h| hex_to_rgb(*h))
            .collect();
        for c in &cat.colors {
            assert!(palette.contains(c), "{:?} color {:?}", cat.category, c);
        }
    }
    let silver = field();
    for c in &silver.get(Category::Silver).unwrap().colors {
        assert_eq!(*c, [1.0, 1.0, 1.0]);
    }
}

#[test]
fn lights_use_tighter_noise() {
    assert!(Category::Light.radial_noise() < Category::Ornament.radial_noise());
    assert_eq!(Category::Ornament.palette(), Category::Diamond.palette());
}

#[test]
fn same_seed_same_field() {
    let a = field();
    let b = field();
    for (ca, cb) in a.categories.iter().zip(b.categories.iter()) {
        assert_eq!(ca.assembled, cb.assembled);
        assert_eq!(ca.exploded, cb.exploded);
        assert_eq!(ca.colors, cb.colors);
    }
}

#[test]
fn photo_anchors_follow_their_distribution() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let a = PhotoAnchor::generate(&mut rng);
        assert!(a.assembled.y >= -4.0 && a.assembled.y <= 4.0);
        let r = (a.assembled.x * a.assembled.x + a.assembled.z * a.assembled.z).sqrt();
        let base = cone_radius(a.assembled.y);
        assert!(r >= base + 0.5 - 1e-4 && r <= base + 0.9 + 1e-4);
        let re = a.exploded.length();
        assert!(re >= 5.0 - 1e-4 && re <= 9.0 + 1e-4);
        assert!(a.tilt_x.abs() <= 0.25 && a.tilt_z.abs() <= 0.1);
    }
}

#[test]
fn hex_to_rgb_unpacks_channels() {
    assert_eq!(hex_to_rgb(0xFFFFFF), [1.0, 1.0, 1.0]);
    assert_eq!(hex_to_rgb(0x000000), [0.0, 0.0, 0.0]);
    let gold = hex_to_rgb(0xFFD700);
    assert_eq!(gold[0], 1.0);
    assert!((gold[1] - 215.0 / 255.0).abs() < 1e-6);
    assert_eq!(gold[2], 0.0);
}
