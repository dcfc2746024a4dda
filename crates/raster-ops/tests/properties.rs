use proptest::prelude::*;
use raster_core::{Channel, Image, Pixel};
use raster_ops::channels::{combine_rgb, split_rgb};
use raster_ops::composite::split_view;
use raster_ops::histogram::Histogram;
use raster_ops::levels::adjust_levels;
use raster_ops::transform::{flip_h, flip_v};
use raster_ops::wavelet::compress;
use raster_ops::{Levels, Operation};

fn image_strategy(max_side: usize) -> impl Strategy<Value = Image> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(h, w)| {
        prop::collection::vec((0u8..=255, 0u8..=255, 0u8..=255), h * w).prop_map(move |px| {
            let pixels = px.into_iter().map(|(r, g, b)| Pixel::from([r, g, b])).collect();
            Image::from_pixels(h, w, pixels).unwrap()
        })
    })
}

fn levels_strategy() -> impl Strategy<Value = Levels> {
    (0u8..=253)
        .prop_flat_map(|b| (Just(b), (b + 1)..=254))
        .prop_flat_map(|(b, m)| (Just(b), Just(m), (m + 1)..=255))
        .prop_map(|(b, m, w)| Levels::new(b as f32, m as f32, w as f32).unwrap())
}

proptest! {
    #[test]
    fn prop_pixel_always_clamped(r in -1000.0f32..1000.0, g in -1000.0f32..1000.0, b in -1000.0f32..1000.0) {
        let px = Pixel::new(r, g, b);
        for v in px.to_array() {
            prop_assert!((0.0..=255.0).contains(&v));
        }
    }

    #[test]
    fn prop_double_flip_is_identity(img in image_strategy(12)) {
        prop_assert_eq!(flip_h(&flip_h(&img)), img.clone());
        prop_assert_eq!(flip_v(&flip_v(&img)), img);
    }

    #[test]
    fn prop_split_combine_round_trip(img in image_strategy(10)) {
        let parts = split_rgb(&img);
        let back = combine_rgb(&parts.red, &parts.green, &parts.blue).unwrap();
        prop_assert_eq!(back, img);
    }

    #[test]
    fn prop_histogram_sums_to_pixel_count(img in image_strategy(16)) {
        let hist = Histogram::compute(&img);
        for c in Channel::ALL {
            prop_assert_eq!(hist.total(c), img.pixel_count() as u64);
        }
    }

    #[test]
    fn prop_levels_control_points(levels in levels_strategy()) {
        let img = Image::from_fn(1, 3, |_, c| {
            Pixel::gray([levels.black, levels.mid, levels.white][c])
        });
        let out = adjust_levels(&img, &levels).unwrap();
        prop_assert!((out.pixel(0, 0).red() - 0.0).abs() < 1e-2);
        prop_assert!((out.pixel(0, 1).green() - 128.0).abs() < 1e-2);
        prop_assert!((out.pixel(0, 2).blue() - 255.0).abs() < 1e-2);
    }

    #[test]
    fn prop_compress_zero_percent_near_identity(img in image_strategy(9)) {
        let out = compress(&img, 0.0).unwrap();
        for (a, b) in out.as_slice().iter().zip(img.as_slice()) {
            for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
                prop_assert!((x - y).abs() < 1e-2, "{} vs {}", x, y);
            }
        }
    }

    #[test]
    fn prop_compress_keeps_shape_and_range(img in image_strategy(9), pct in 0.0f32..=100.0) {
        let out = compress(&img, pct).unwrap();
        prop_assert_eq!(out.dimensions(), img.dimensions());
        for px in out.as_slice() {
            for v in px.to_array() {
                prop_assert!((0.0..=255.0).contains(&v));
            }
        }
    }

    #[test]
    fn prop_compress_hundred_percent_black(img in image_strategy(9)) {
        let out = compress(&img, 100.0).unwrap();
        prop_assert!(out.as_slice().iter().all(|&p| p == Pixel::BLACK));
    }

    #[test]
    fn prop_split_view_ends(img in image_strategy(10), idx in 0usize..Operation::SIMPLE.len()) {
        let op = Operation::SIMPLE[idx];
        prop_assume!(op != Operation::Histogram);
        prop_assert_eq!(split_view(&img, &op, 0.0).unwrap(), img.clone());
        prop_assert_eq!(split_view(&img, &op, 100.0).unwrap(), op.apply(&img).unwrap());
    }

    #[test]
    fn prop_dither_is_binary(img in image_strategy(12)) {
        let out = Operation::Dither.apply(&img).unwrap();
        prop_assert!(out.as_slice().iter().all(|&p| p == Pixel::BLACK || p == Pixel::WHITE));
    }
}
