//! Score statistics: top story selection and histogram binning.

use crate::models::Story;

/// One bin of the score histogram, covering `[lower, upper)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramBin {
    pub lower: i64,
    pub upper: i64,
    pub count: usize,
}

/// The story with the maximum score.
///
/// Ties resolve to the earliest story in fetch order, so the fold only
/// replaces the current best on a strictly greater score.
pub fn top_story(stories: &[Story]) -> Option<&Story> {
    let mut best: Option<&Story> = None;

    for story in stories {
        match best {
            Some(current) if story.score <= current.score => {}
            _ => best = Some(story),
        }
    }

    best
}

/// Bin the story scores into `bins` equal-width bins.
///
/// The width is chosen so the maximum score lands inside the last bin.
/// Returns an empty vector when there are no stories or `bins` is 0.
pub fn score_histogram(stories: &[Story], bins: usize) -> Vec<HistogramBin> {
    if stories.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = stories.iter().map(|s| s.score).min().unwrap_or(0);
    let max = stories.iter().map(|s| s.score).max().unwrap_or(0);
    let width = (max - min) / bins as i64 + 1;

    let mut out: Vec<HistogramBin> = (0..bins as i64)
        .map(|i| HistogramBin {
            lower: min + i * width,
            upper: min + (i + 1) * width,
            count: 0,
        })
        .collect();

    for story in stories {
        let idx = ((story.score - min) / width) as usize;
        out[idx].count += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: u64, score: i64) -> Story {
        Story::new(id, format!("story {}", id), score, None)
    }

    #[test]
    fn test_top_story_first_occurrence_wins() {
        let stories = vec![story(1, 10), story(2, 50), story(3, 50), story(4, 5)];

        let top = top_story(&stories).unwrap();
        assert_eq!(top.id, 2);
        assert_eq!(top.score, 50);
    }

    #[test]
    fn test_top_story_empty() {
        assert!(top_story(&[]).is_none());
    }

    #[test]
    fn test_histogram_counts_sum_to_story_count() {
        let stories: Vec<Story> = (0..37).map(|i| story(i, (i as i64) * 13 % 400)).collect();

        let bins = score_histogram(&stories, 15);

        assert_eq!(bins.len(), 15);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, stories.len());
    }

    #[test]
    fn test_histogram_max_score_falls_in_last_reachable_bin() {
        let stories = vec![story(1, 0), story(2, 150)];

        let bins = score_histogram(&stories, 15);

        // every score lands in exactly one bin
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
        for bin in &bins {
            assert!(bin.lower < bin.upper);
        }
    }

    #[test]
    fn test_histogram_identical_scores() {
        let stories = vec![story(1, 42), story(2, 42), story(3, 42)];

        let bins = score_histogram(&stories, 15);

        assert_eq!(bins[0].count, 3);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
    }

    #[test]
    fn test_histogram_empty_inputs() {
        assert!(score_histogram(&[], 15).is_empty());
        assert!(score_histogram(&[story(1, 10)], 0).is_empty());
    }
}
