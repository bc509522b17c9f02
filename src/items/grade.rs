//! Weighted grade determination.
//!
//! One uniform draw in [0, 100) walks a cumulative threshold cascade. The
//! bands are deliberately not normalized: configured rates summing past 100
//! compress the later bands instead of failing. Callers clamp `max_grade` to
//! the tier's ceiling (and drops additionally cap at Ancient) before calling.

use crate::config::GradeRates;
use crate::items::types::Grade;
use rand::Rng;

/// Roll a grade between `min_grade` and `max_grade` under the configured
/// bands. The cascade shape depends on the floor:
///
/// - Ancient floor (tier 6-7 crafting): hero band promotes one step.
/// - Rare floor (tier 5 crafting): hero band promotes one step.
/// - Uncommon floor (tier 3-4 crafting): hero band to the top grade, then a
///   rare band to Rare, remainder Uncommon.
/// - Common floor (drops, tier 1-2 crafting): up to three cumulative bands
///   keyed by `max_grade`, remainder Common.
pub fn determine_grade(
    rates: &GradeRates,
    max_grade: Grade,
    min_grade: Grade,
    rng: &mut impl Rng,
) -> Grade {
    let roll = rng.gen_range(0.0..100.0);
    match min_grade {
        Grade::Ancient | Grade::Rare => {
            promote_one_step(roll, rates.hero, min_grade, max_grade)
        }
        Grade::Uncommon => {
            if max_grade > Grade::Uncommon && roll < rates.hero {
                max_grade
            } else if max_grade >= Grade::Rare && roll < rates.hero + rates.rare {
                Grade::Rare
            } else {
                Grade::Uncommon
            }
        }
        _ => common_cascade(roll, rates, max_grade),
    }
}

fn promote_one_step(roll: f64, hero: f64, min_grade: Grade, max_grade: Grade) -> Grade {
    if max_grade > min_grade && roll < hero {
        min_grade.next().unwrap_or(min_grade).min(max_grade)
    } else {
        min_grade
    }
}

fn common_cascade(roll: f64, rates: &GradeRates, max_grade: Grade) -> Grade {
    if max_grade >= Grade::Ancient {
        if roll < rates.hero {
            Grade::Ancient
        } else if roll < rates.hero + rates.rare {
            Grade::Rare
        } else if roll < rates.hero + rates.rare + rates.high {
            Grade::Uncommon
        } else {
            Grade::Common
        }
    } else if max_grade == Grade::Rare {
        if roll < rates.rare {
            Grade::Rare
        } else if roll < rates.rare + rates.high {
            Grade::Uncommon
        } else {
            Grade::Common
        }
    } else if max_grade == Grade::Uncommon {
        if roll < rates.high {
            Grade::Uncommon
        } else {
            Grade::Common
        }
    } else {
        Grade::Common
    }
}
