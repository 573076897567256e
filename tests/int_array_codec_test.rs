use mvd_search::codec::{self, CodecConfig, IntArrayCodec, WidthThresholds};
use mvd_search::error::MvdError;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_random_arrays_round_trip_at_every_width() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let ranges = [
        (-128, 127),
        (-32_768, 32_766),
        (-8_388_608, 8_388_606),
        (i32::MIN, i32::MAX),
    ];

    for codec in [
        IntArrayCodec::default(),
        IntArrayCodec::new(CodecConfig::with_thresholds(WidthThresholds::TwosComplement)),
    ] {
        for (width, &(low, high)) in ranges.iter().enumerate() {
            for len in 0..12 {
                let mut values: Vec<i32> = (0..len).map(|_| rng.random_range(low..=high)).collect();
                // Pin the extremes so the chosen width is deterministic.
                if len >= 2 {
                    values[0] = low;
                    values[1] = high;
                }

                let compressed = codec.encode(&values);
                if len >= 2 {
                    assert_eq!(compressed.byte_width(), width + 1);
                }
                assert_eq!(
                    compressed.len(),
                    1 + (len * compressed.byte_width()).div_ceil(4)
                );
                assert_eq!(codec.decode(compressed.words()).unwrap(), values);
            }
        }
    }
}

#[test]
fn test_width_is_monotonic_in_range() {
    let maxima = [0, 1, 127, 128, 32_766, 32_767, 8_388_606, 8_388_607, i32::MAX];
    let minima = [0, -1, -128, -129, -32_768, -32_769, -8_388_608, -8_388_609, i32::MIN];

    for thresholds in [WidthThresholds::Legacy, WidthThresholds::TwosComplement] {
        let codec = IntArrayCodec::new(CodecConfig::with_thresholds(thresholds));
        for i in 0..maxima.len() {
            for j in 0..minima.len() {
                let width = codec.width_needed(maxima[i], minima[j]);
                assert!((1..=4).contains(&width));
                if i + 1 < maxima.len() {
                    assert!(codec.width_needed(maxima[i + 1], minima[j]) >= width);
                }
                if j + 1 < minima.len() {
                    assert!(codec.width_needed(maxima[i], minima[j + 1]) >= width);
                }
            }
        }
    }
}

#[test]
fn test_zero_does_not_widen() {
    assert_eq!(codec::encode(&[0, 0, 0]).byte_width(), 1);
    assert_eq!(codec::encode(&[0, -1]).byte_width(), 1);
    assert_eq!(codec::width_needed(0, 0), 1);
}

#[test]
fn test_legacy_boundary_values() {
    // 32767 fits two bytes but the legacy thresholds store it in three.
    let compressed = codec::encode(&[32_767]);
    assert_eq!(compressed.byte_width(), 3);
    assert_eq!(compressed.words(), &[0x0001_0003, 0x007F_FF00]);
    assert_eq!(codec::decode(compressed.words()).unwrap(), vec![32_767]);
}

#[test]
fn test_known_wire_format_decodes() {
    // Two-byte packing of [258, -2, 7] written by an existing index.
    let words = [0x0002_0002, 0x0102_FFFE, 0x0007_0000];
    assert_eq!(codec::decode(&words).unwrap(), vec![258, -2, 7]);
}

#[test]
fn test_header_width_out_of_range_fails() {
    for width in [0u32, 5, 8, 0xFFFF] {
        let result = codec::decode(&[width, 0, 0]);
        match result {
            Err(MvdError::InvalidFormat(message)) => assert!(message.contains("numBytes")),
            other => panic!("expected format error for width {width}, got {other:?}"),
        }
    }
}

#[test]
fn test_decode_via_compressed_array_matches_codec() {
    let values = [9, -9, 90_000, -90_000];
    let compressed = codec::encode(&values);
    assert_eq!(compressed.decode(), codec::decode(compressed.words()).unwrap());
    assert_eq!(compressed.element_count(), values.len());
}
