use super::chain_model;
use crate::codec::Codec;
use crate::default_model::default_model;
use crate::model::TableModel;
use crate::pack::PACKS;
use crate::train::{train, TrainingConfig};
use proptest::prelude::*;

proptest! {
    /// Property 1: Roundtrip over characters the model knows
    #[test]
    fn prop_roundtrip_known_chars(input in "[eaiothnrslucwmdbpfgvyk'HMTBxIWL-]{0,64}") {
        let codec = Codec::new(default_model());
        let packed = codec.encode(&input);
        prop_assert_eq!(codec.decode(&packed).unwrap(), input);
    }

    /// Property 2: Roundtrip over any string, including non-ASCII and NUL
    #[test]
    fn prop_roundtrip_any_string(input: String) {
        let codec = Codec::new(default_model());
        let packed = codec.encode(&input);
        prop_assert_eq!(codec.decode(&packed).unwrap(), input);
    }

    /// Property 3: Roundtrip over arbitrary bytes
    #[test]
    fn prop_roundtrip_bytes(input: Vec<u8>) {
        let codec = Codec::new(default_model());
        let packed = codec.compress(&input);
        prop_assert_eq!(codec.decompress(&packed).unwrap(), input);
    }

    /// Property 4: Known ASCII characters never grow
    /// Packs shrink and literals of known characters are a single byte.
    #[test]
    fn prop_known_chars_never_grow(input in "[eaiothnrslucwmdbpfgvyk'HMTBxIWL-]{0,64}") {
        let packed = Codec::new(default_model()).encode(&input);
        prop_assert!(packed.len() <= input.len());
    }

    /// Property 5: Worst case is one escape byte per input byte
    #[test]
    fn prop_output_bounded(input: Vec<u8>) {
        let packed = Codec::new(default_model()).compress(&input);
        prop_assert!(packed.len() <= 2 * input.len());
    }

    /// Property 6: Stats account for every input and output byte
    #[test]
    fn prop_stats_consistent(input: Vec<u8>) {
        let (packed, stats) = Codec::new(default_model()).compress_with_stats(&input);
        prop_assert_eq!(stats.input_len, input.len());
        prop_assert_eq!(stats.wide_literals, 0);
        prop_assert_eq!(stats.output_bytes, packed.len());

        let packed_chars: usize = stats
            .packed_units
            .iter()
            .zip(PACKS.iter())
            .map(|(&units, pack)| units * pack.unpacked_chars)
            .sum();
        prop_assert_eq!(
            packed_chars + stats.literals + stats.escaped_literals,
            input.len()
        );

        let packed_bytes: usize = stats
            .packed_units
            .iter()
            .zip(PACKS.iter())
            .map(|(&units, pack)| units * pack.packed_bytes)
            .sum();
        prop_assert_eq!(
            packed_bytes + stats.literals + 2 * stats.escaped_literals,
            packed.len()
        );
    }

    /// Property 7: Strings cost at most four bytes per character
    /// and single-byte escapes only cover U+0000 and U+0080..=U+00FF
    #[test]
    fn prop_string_stats_consistent(input: String) {
        let (packed, stats) = Codec::new(default_model()).encode_with_stats(&input);
        let chars = input.chars().count();
        prop_assert_eq!(stats.input_len, chars);
        prop_assert!(packed.len() <= 4 * chars);

        let wide = input.chars().filter(|&c| u32::from(c) > 0xff).count();
        prop_assert_eq!(stats.wide_literals, wide);
        let latin1 = input
            .chars()
            .filter(|&c| c == '\0' || (0x80..=0xff).contains(&u32::from(c)))
            .count();
        prop_assert_eq!(stats.escaped_literals, latin1);
    }

    /// Property 8: Models trained on a corpus roundtrip that corpus
    #[test]
    fn prop_trained_roundtrip(corpus in prop::collection::vec("[a-zA-Z' -]{0,24}", 1..16)) {
        let spec = train(corpus.iter().map(String::as_str), &TrainingConfig::default()).unwrap();
        let model = TableModel::new(spec).unwrap();
        let codec = Codec::new(&model);

        for text in &corpus {
            let packed = codec.encode(text);
            prop_assert_eq!(&codec.decode(&packed).unwrap(), text);
        }
    }

    /// Property 9: Encoding is deterministic
    #[test]
    fn prop_deterministic(input: String) {
        let codec = Codec::new(default_model());
        prop_assert_eq!(codec.encode(&input), codec.encode(&input));
    }
}

/// Bolero fuzz test: decoding arbitrary bytes never panics
#[cfg(test)]
#[test]
fn fuzz_decompress_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let codec = Codec::new(default_model());
        let _ = codec.decompress(input);
        let _ = codec.decode(input);

        let model = chain_model();
        let _ = Codec::new(&model).decompress(input);
    });
}

/// Bolero fuzz test: compression always roundtrips
#[cfg(test)]
#[test]
fn fuzz_roundtrip() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let codec = Codec::new(default_model());
        let packed = codec.compress(input);
        assert_eq!(codec.decompress(&packed).unwrap(), *input);
    });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_empty() {
        let codec = Codec::new(default_model());
        assert!(codec.encode("").is_empty());
        assert_eq!(codec.decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_unit_size_follows_chain_length() {
        let model = chain_model();
        let codec = Codec::new(&model);

        for (input, size) in [("ab", 1), ("abcd", 2), ("abcdefgh", 4)] {
            let packed = codec.encode(input);
            assert_eq!(packed.len(), size, "unit size for {:?}", input);
            assert_eq!(codec.decode(&packed).unwrap(), input);
        }
    }

    #[test]
    fn test_lookahead_stops_at_eight() {
        let model = chain_model();
        let codec = Codec::new(&model);

        // Nine linked characters: one 8-character unit, then i on its own
        let (packed, stats) = codec.compress_with_stats(b"abcdefghi");
        assert_eq!(packed.len(), 5);
        assert_eq!(stats.packed_units, [0, 0, 1]);
        assert_eq!(packed[4], b'i');
        assert_eq!(codec.decode(&packed).unwrap(), "abcdefghi");
    }

    #[test]
    fn test_single_unknown_character() {
        let codec = Codec::new(default_model());

        let packed = codec.encode("z");
        assert_eq!(packed, vec![b'z']);
        assert_eq!(codec.decode(&packed).unwrap(), "z");

        // Code points 128..=255 are the sentinel and the code point
        let packed = codec.encode("é");
        assert_eq!(packed, vec![0x00, 0xe9]);
        assert_eq!(codec.decode(&packed).unwrap(), "é");
        assert_eq!(codec.decode(&[0x00, 0xe9]).unwrap(), "é");

        let packed = codec.encode("\u{ff}");
        assert_eq!(packed, vec![0x00, 0xff]);
        assert_eq!(codec.decode(&packed).unwrap(), "\u{ff}");

        // Above U+00FF the wide escape carries the whole code point
        let packed = codec.encode("€");
        assert_eq!(packed, vec![0xf0, 0x00, 0x20, 0xac]);
        assert_eq!(codec.decode(&packed).unwrap(), "€");

        let packed = codec.compress(&[0xe9]);
        assert_eq!(packed, vec![0x00, 0xe9]);
        assert_eq!(codec.decompress(&packed).unwrap(), vec![0xe9]);
    }

    #[test]
    fn test_mixed_known_and_unknown() {
        let codec = Codec::new(default_model());
        for input in [
            "the-end",
            "Wörterbuch",
            "naïve café",
            "x-forwarded-for: 10.0.0.1",
            "tab\there\0nul",
            "日本語のテキスト",
        ] {
            let packed = codec.encode(input);
            assert_eq!(codec.decode(&packed).unwrap(), input);
        }
    }

    #[test]
    fn test_models_are_shareable_across_threads() {
        let model = std::sync::Arc::new(chain_model());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let model = model.clone();
                std::thread::spawn(move || {
                    let codec = Codec::new(&*model);
                    codec.decode(&codec.encode("abcdefghi")).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "abcdefghi");
        }
    }
}
