// Copyright 2026 The netappfiles developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Random resource names.

use rand::seq::SliceRandom;
use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "aged", "ancient", "autumn", "billowing", "bitter", "black", "blue", "bold", "broad",
    "broken", "calm", "cold", "cool", "crimson", "curly", "damp", "dark", "dawn", "delicate",
    "divine", "dry", "empty", "falling", "fancy", "flat", "floral", "fragrant", "frosty",
    "gentle", "green", "hidden", "holy", "icy", "jolly", "late", "lingering", "little",
    "lively", "long", "lucky", "misty", "morning", "muddy", "mute", "nameless", "noisy",
    "odd", "old", "orange", "patient", "plain", "polished", "proud", "purple", "quiet",
    "rapid", "raspy", "red", "restless", "rough", "round", "royal", "shiny", "shrill", "shy",
    "silent", "small", "snowy", "soft", "solitary", "sparkling", "spring", "square", "steep",
    "still", "summer", "super", "sweet", "throbbing", "tight", "tiny", "twilight", "wandering",
    "weathered", "white", "wild", "winter", "wispy", "withered", "yellow", "young",
];

const NOUNS: &[&str] = &[
    "art", "band", "bar", "base", "bird", "block", "boat", "bonus", "bread", "breeze",
    "brook", "bush", "butterfly", "cake", "cell", "cherry", "cloud", "credit", "darkness",
    "dawn", "dew", "disk", "dream", "dust", "feather", "field", "fire", "firefly", "flower",
    "fog", "forest", "frog", "frost", "glade", "glitter", "grass", "hall", "hat", "haze",
    "heart", "hill", "king", "lab", "lake", "leaf", "limit", "math", "meadow", "mode", "moon",
    "morning", "mountain", "mouse", "mud", "night", "paper", "pine", "poetry", "pond", "queen",
    "rain", "recipe", "resonance", "rice", "river", "salad", "scene", "sea", "shadow", "shape",
    "silence", "sky", "smoke", "snow", "snowflake", "sound", "star", "sun", "sunset", "surf",
    "term", "thunder", "tooth", "tree", "truth", "union", "unit", "violet", "voice", "water",
    "waterfall", "wave", "wildflower", "wind", "wood",
];

const TOKEN_LENGTH: usize = 4;

/// Generate a random name like `snowyfrost4521`.
pub fn haikunate() -> String {
    haikunate_with(&mut rand::thread_rng())
}

/// Generate a random name with the given random number generator.
pub fn haikunate_with<R: Rng>(rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("quiet");
    let noun = NOUNS.choose(rng).copied().unwrap_or("sky");
    let token: String = (0..TOKEN_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    format!("{}{}{}", adjective, noun, token)
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{haikunate, haikunate_with, ADJECTIVES, NOUNS, TOKEN_LENGTH};

    #[test]
    fn test_haikunate_shape() {
        for _ in 0..50 {
            let name = haikunate();
            let (words, digits) = name.split_at(name.len() - TOKEN_LENGTH);
            assert!(digits.chars().all(|c| c.is_ascii_digit()), "{}", name);
            assert!(words.chars().all(|c| c.is_ascii_lowercase()), "{}", name);
            assert!(
                ADJECTIVES
                    .iter()
                    .any(|a| words.starts_with(a) && NOUNS.contains(&&words[a.len()..])),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_haikunate_seeded() {
        let first = haikunate_with(&mut StdRng::seed_from_u64(42));
        let second = haikunate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
