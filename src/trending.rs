/*!
 * Trending topics shown as one-click suggestions.
 */

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// A suggested topic with a popularity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendingTopic {
    pub topic: &'static str,
    /// 0-100
    pub heat: u8,
}

pub const TRENDING_TOPICS: [TrendingTopic; 10] = [
    TrendingTopic { topic: "Quantum Computing", heat: 98 },
    TrendingTopic { topic: "Black Holes", heat: 87 },
    TrendingTopic { topic: "Artificial Intelligence", heat: 95 },
    TrendingTopic { topic: "Blockchain", heat: 82 },
    TrendingTopic { topic: "Dark Matter", heat: 78 },
    TrendingTopic { topic: "String Theory", heat: 76 },
    TrendingTopic { topic: "Climate Change", heat: 92 },
    TrendingTopic { topic: "Genetic Engineering", heat: 89 },
    TrendingTopic { topic: "Renewable Energy", heat: 85 },
    TrendingTopic { topic: "Virtual Reality", heat: 81 },
];

/// Shuffle the list and take `count` topics (clamped to the list length).
pub fn sample_trending<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<TrendingTopic> {
    let mut topics = TRENDING_TOPICS.to_vec();
    topics.shuffle(rng);
    topics.truncate(count.min(TRENDING_TOPICS.len()));
    topics
}
