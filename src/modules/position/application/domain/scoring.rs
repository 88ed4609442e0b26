use crate::modules::position::application::domain::entities::InterviewScore;

/// Mean of the scored interviews, rounded half-up to one decimal.
///
/// Pending interviews are ignored. With nothing scored the result is `0.0`.
pub fn average_score(scores: &[InterviewScore]) -> f64 {
    let (sum, count) = scores
        .iter()
        .fold((0_i64, 0_u32), |(sum, count), score| match score {
            InterviewScore::Scored(value) => (sum + i64::from(*value), count + 1),
            InterviewScore::Pending => (sum, count),
        });

    if count == 0 {
        return 0.0;
    }

    let mean = sum as f64 / f64::from(count);
    round_to_one_decimal(mean)
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use InterviewScore::{Pending, Scored};

    #[test]
    fn empty_list_is_zero() {
        assert_eq!(average_score(&[]), 0.0);
    }

    #[test]
    fn only_pending_is_zero() {
        assert_eq!(average_score(&[Pending, Pending]), 0.0);
    }

    #[test]
    fn mean_of_two_scores() {
        assert_eq!(average_score(&[Scored(4), Scored(5)]), 4.5);
    }

    #[test]
    fn pending_interviews_do_not_drag_the_mean() {
        assert_eq!(average_score(&[Scored(3), Pending, Scored(5)]), 4.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        // 10 / 3 = 3.333..
        assert_eq!(average_score(&[Scored(3), Scored(3), Scored(4)]), 3.3);
        // 11 / 3 = 3.666..
        assert_eq!(average_score(&[Scored(3), Scored(4), Scored(4)]), 3.7);
    }

    #[test]
    fn halves_round_up() {
        // 1.25 -> 1.3
        assert_eq!(
            average_score(&[Scored(1), Scored(1), Scored(1), Scored(2)]),
            1.3
        );
    }

    #[test]
    fn single_score_is_returned_as_is() {
        assert_eq!(average_score(&[Scored(5)]), 5.0);
    }
}
