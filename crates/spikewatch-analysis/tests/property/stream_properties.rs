use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spikewatch_analysis::detector::detect;
use spikewatch_analysis::generator::{generate, generate_labeled, spike_count};
use spikewatch_core::DataStream;

proptest! {
    #[test]
    fn generated_length_matches_request(length in 1usize..2000, seed in any::<u64>()) {
        let stream = generate(length, 0.0, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(stream.len(), length);
    }

    #[test]
    fn spike_positions_distinct_and_in_range(
        length in 1usize..1500,
        rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let labeled = generate_labeled(length, rate, &mut StdRng::seed_from_u64(seed)).unwrap();
        let truth = labeled.ground_truth.as_slice();
        prop_assert_eq!(truth.len(), spike_count(length, rate));
        prop_assert!(truth.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(truth.iter().all(|&i| i < length));
    }

    #[test]
    fn out_of_range_rate_rejected(
        rate in prop_oneof![-1e6f64..-1e-9, (1.0f64 + 1e-9)..1e6],
    ) {
        let result = generate(10, rate, &mut StdRng::seed_from_u64(0));
        prop_assert!(result.is_err());
    }

    #[test]
    fn detected_indices_strictly_increase(
        values in prop::collection::vec(-1e6f64..1e6, 1..300),
        threshold in 0.1f64..10.0,
    ) {
        let stream = DataStream::from(values);
        let flagged = detect(&stream, threshold);
        let indices: Vec<usize> = flagged.indices().collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for anomaly in &flagged {
            prop_assert!(anomaly.index < stream.len());
            prop_assert_eq!(stream[anomaly.index].to_bits(), anomaly.value.to_bits());
        }
    }

    #[test]
    fn constant_stream_flags_nothing(
        value in -1e9f64..1e9,
        length in 1usize..200,
        threshold in 1e-6f64..100.0,
    ) {
        let stream = DataStream::from(vec![value; length]);
        prop_assert!(detect(&stream, threshold).is_empty());
    }

    #[test]
    fn detection_is_pure(
        values in prop::collection::vec(-1e3f64..1e3, 1..200),
        threshold in 0.5f64..5.0,
    ) {
        let stream = DataStream::from(values);
        prop_assert_eq!(detect(&stream, threshold), detect(&stream, threshold));
    }
}
