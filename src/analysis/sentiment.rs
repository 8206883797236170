//! Sentiment scoring for story titles.
//!
//! Polarity comes straight from the VADER model's compound score; there
//! is no custom scoring logic on top of it, so short or non-English
//! titles get whatever the model yields.

use crate::models::Story;

/// Score the polarity of a text in [-1, 1].
pub fn polarity(text: &str) -> f64 {
    let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
    analyzer
        .polarity_scores(text)
        .get("compound")
        .copied()
        .unwrap_or(0.0)
}

/// Attach a sentiment score to every story, in place.
pub fn attach_sentiment(stories: &mut [Story]) {
    for story in stories.iter_mut() {
        story.sentiment = polarity(&story.title);
    }
}

/// Arithmetic mean of all story sentiments; 0.0 for an empty slice.
pub fn average_sentiment(stories: &[Story]) -> f64 {
    if stories.is_empty() {
        return 0.0;
    }

    let total: f64 = stories.iter().map(|s| s.sentiment).sum();
    total / stories.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_range() {
        for text in ["This is wonderful news", "A horrible disaster", "The"] {
            let score = polarity(text);
            assert!((-1.0..=1.0).contains(&score), "{} out of range", score);
        }
    }

    #[test]
    fn test_polarity_signs() {
        assert!(polarity("This library is excellent and I love it") > 0.0);
        assert!(polarity("This is a terrible, broken disaster") < 0.0);
    }

    #[test]
    fn test_attach_sentiment_covers_all_stories() {
        let mut stories = vec![
            Story::new(1, "An absolutely wonderful release".to_string(), 10, None),
            Story::new(2, "Compiler internals explained".to_string(), 20, None),
        ];

        attach_sentiment(&mut stories);

        assert!(stories[0].sentiment > 0.0);
        assert!((-1.0..=1.0).contains(&stories[1].sentiment));
    }

    #[test]
    fn test_average_sentiment() {
        let mut stories = vec![
            Story::new(1, "a".to_string(), 0, None),
            Story::new(2, "b".to_string(), 0, None),
        ];
        stories[0].sentiment = 0.4;
        stories[1].sentiment = -0.2;

        let avg = average_sentiment(&stories);
        assert!((avg - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_average_sentiment_empty() {
        assert_eq!(average_sentiment(&[]), 0.0);
    }
}
