use crate::enums::verdict::Verdict;
use crate::structs::config::scoring_config::ScoringConfig;
use crate::structs::diagnostic_text::DiagnosticText;
use crate::structs::report_summary::ReportSummary;

/// Turns diagnostic output into a bounded score: every issue costs a fixed
/// penalty off the base score, never dropping below the floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityScorer {
    config: ScoringConfig,
}

impl QualityScorer {
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn total_issues<'a>(outputs: impl IntoIterator<Item = &'a DiagnosticText>) -> u32 {
        outputs
            .into_iter()
            .map(DiagnosticText::issue_count)
            .fold(0, u32::saturating_add)
    }

    pub fn score(&self, total_issues: u32) -> u32 {
        let penalty = total_issues.saturating_mul(self.config.issue_penalty);
        self.config
            .base_score
            .saturating_sub(penalty)
            .max(self.config.score_floor)
    }

    pub const fn verdict(&self, score: u32) -> Verdict {
        if score >= self.config.good_quality_threshold {
            Verdict::GoodQuality
        } else {
            Verdict::NeedsImprovement
        }
    }

    pub fn summarize<'a>(&self, outputs: impl IntoIterator<Item = &'a DiagnosticText>) -> ReportSummary {
        let total_issues = Self::total_issues(outputs);
        let quality_score = self.score(total_issues);

        ReportSummary {
            quality_score,
            total_issues,
            verdict: self.verdict(quality_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clean_output_scores_full_marks() {
        let summary = QualityScorer::default().summarize([&DiagnosticText::default(), &DiagnosticText::default()]);
        assert_eq!(summary.total_issues, 0);
        assert_eq!(summary.quality_score, 100);
        assert_eq!(summary.verdict, Verdict::GoodQuality);
    }

    #[test]
    fn three_issues_need_improvement() {
        let linter = DiagnosticText::new("a:b");
        let style = DiagnosticText::new("c:d");
        let summary = QualityScorer::default().summarize([&linter, &style, &DiagnosticText::new(":")]);
        assert_eq!(summary.total_issues, 3);
        assert_eq!(summary.quality_score, 70);
        assert_eq!(summary.verdict, Verdict::NeedsImprovement);
    }

    #[test]
    fn two_issues_are_still_good() {
        let scorer = QualityScorer::default();
        assert_eq!(scorer.score(2), 80);
        assert_eq!(scorer.verdict(80), Verdict::GoodQuality);
        assert_eq!(scorer.verdict(79), Verdict::NeedsImprovement);
    }

    #[test]
    fn score_is_clamped_at_floor() {
        let scorer = QualityScorer::default();
        assert_eq!(scorer.score(6), 40);
        assert_eq!(scorer.score(7), 40);
        assert_eq!(scorer.score(1_000), 40);
        assert_eq!(scorer.score(u32::MAX), 40);
    }

    #[test]
    fn custom_scoring_is_honoured() {
        let scorer = QualityScorer::new(ScoringConfig {
            base_score: 10,
            issue_penalty: 1,
            score_floor: 0,
            good_quality_threshold: 9,
        });
        assert_eq!(scorer.score(1), 9);
        assert_eq!(scorer.verdict(scorer.score(2)), Verdict::NeedsImprovement);
        assert_eq!(scorer.score(50), 0);
    }

    proptest! {
        #[test]
        fn score_stays_in_range(issues in any::<u32>()) {
            let score = QualityScorer::default().score(issues);
            prop_assert!((40..=100).contains(&score));
        }

        #[test]
        fn score_follows_penalty_formula(issues in 0u32..1_000) {
            let score = QualityScorer::default().score(issues);
            let raw = 100i64 - 10 * i64::from(issues);
            if raw >= 40 {
                prop_assert_eq!(i64::from(score), raw);
            } else {
                prop_assert_eq!(score, 40);
            }
        }

        #[test]
        fn verdict_matches_threshold(issues in 0u32..20) {
            let scorer = QualityScorer::default();
            let score = scorer.score(issues);
            prop_assert_eq!(scorer.verdict(score) == Verdict::GoodQuality, score >= 80);
        }

        #[test]
        fn issues_are_colon_counts(linter in ".{0,64}", style in ".{0,64}") {
            let expected = linter.matches(':').count() + style.matches(':').count();
            let summary = QualityScorer::default()
                .summarize([&DiagnosticText::new(linter), &DiagnosticText::new(style)]);
            prop_assert_eq!(summary.total_issues as usize, expected);
        }
    }
}
