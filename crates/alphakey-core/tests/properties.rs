use alphakey_core::media::image::{index_to_coordinates, VisitationOrder};
use alphakey_core::pipeline::{hide, unveil};
use alphakey_core::{CodecOptions, Key, Seed};
use fastrand::Rng;
use image::{Rgba, RgbaImage};
use proptest::prelude::*;
use std::collections::HashSet;

fn image_strategy() -> impl Strategy<Value = RgbaImage> {
    (1u32..24, 1u32..24, any::<u64>()).prop_map(|(width, height, noise)| {
        let mut rng = Rng::with_seed(noise);
        RgbaImage::from_fn(width, height, |_, _| {
            Rgba([rng.u8(..), rng.u8(..), rng.u8(..), rng.u8(..)])
        })
    })
}

fn image_and_message() -> impl Strategy<Value = (RgbaImage, Vec<u8>)> {
    image_strategy().prop_flat_map(|img| {
        let capacity = (img.width() * img.height()) as usize;
        (Just(img), prop::collection::vec(any::<u8>(), 0..=capacity))
    })
}

proptest! {
    /// Property: unveiling with the returned key gives back the message.
    #[test]
    fn prop_roundtrip((img, message) in image_and_message(), rng_seed in any::<u64>()) {
        let opts = CodecOptions::default();
        let (key, carrier) = hide(&img, &message, &mut Rng::with_seed(rng_seed), &opts).unwrap();

        prop_assert_eq!(key.message_len, message.len());
        prop_assert_eq!(unveil(&carrier, &key, &opts).unwrap(), message);
    }

    /// Property: color channels are untouched, at most `len` alpha values change.
    #[test]
    fn prop_colors_preserved((img, message) in image_and_message(), rng_seed in any::<u64>()) {
        let (_, carrier) = hide(&img, &message, &mut Rng::with_seed(rng_seed), &CodecOptions::default()).unwrap();

        prop_assert_eq!(carrier.dimensions(), img.dimensions());
        let mut changed = 0;
        for (before, after) in img.pixels().zip(carrier.pixels()) {
            prop_assert_eq!(&before.0[..3], &after.0[..3]);
            if before.0[3] != after.0[3] {
                changed += 1;
            }
        }
        prop_assert!(changed <= message.len());
    }

    /// Property: the first N indices are pairwise distinct and in range.
    #[test]
    fn prop_visitation_unique(seed in any::<u64>(), max in 1usize..2000, fraction in 0.0f64..=1.0) {
        let n = ((max as f64) * fraction) as usize;
        let drawn: Vec<usize> = VisitationOrder::new(seed, max).take(n).collect();

        prop_assert_eq!(drawn.len(), n);
        prop_assert!(drawn.iter().all(|i| *i < max));
        prop_assert_eq!(drawn.iter().collect::<HashSet<_>>().len(), n);
    }

    /// Property: same inputs, same seed and same order.
    #[test]
    fn prop_deterministic(x in any::<u32>(), y in any::<u32>(), len in any::<usize>(), rgba in any::<[u8; 4]>()) {
        let key = Key::new(x, y, len);
        let a = Seed::derive(&key, Rgba(rgba));
        let b = Seed::derive(&key, Rgba(rgba));
        prop_assert_eq!(a, b);

        let order_a: Vec<usize> = VisitationOrder::new(a.generator_seed, 500).take(100).collect();
        let order_b: Vec<usize> = VisitationOrder::new(b.generator_seed, 500).take(100).collect();
        prop_assert_eq!(order_a, order_b);
    }

    /// Property: mapping is row by row and invariant to the modulo reduction.
    #[test]
    fn prop_coordinate_mapping(width in 1u32..500, height in 1u32..500, index in any::<u32>()) {
        let pixels = width as usize * height as usize;
        let i = index as usize % pixels;
        let (x, y) = index_to_coordinates(i, width, height);

        prop_assert_eq!(x as usize, i % width as usize);
        prop_assert_eq!(y as usize, i / width as usize);
        prop_assert!(y < height);
        prop_assert_eq!(index_to_coordinates(i + pixels, width, height), (x, y));
    }

    /// Property: messages longer than the pixel count are refused.
    #[test]
    fn prop_capacity_rejection(img in image_strategy(), extra in 1usize..10) {
        let message = vec![0u8; (img.width() * img.height()) as usize + extra];
        let result = hide(&img, &message, &mut Rng::with_seed(0), &CodecOptions::default());

        prop_assert!(
            matches!(result, Err(alphakey_core::AlphaKeyError::ImageCapacityError { .. })),
            "expected capacity error"
        );
    }
}
