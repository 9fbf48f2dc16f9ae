use super::tables::{PercentileValues, ReferenceTable, CHECKPOINTS};

/// 나이(개월)에 대한 다섯 백분위 기준값.
///
/// 기준점과 정확히 일치하면 그 행을 그대로 쓰고, 표 범위를 벗어나면 가장 가까운
/// 끝 행으로 고정한다(외삽하지 않음). 그 사이는 열마다 선형 보간한다.
pub fn reference_at(table: &ReferenceTable, age_months: f64) -> PercentileValues {
    let mut lower = None;
    let mut upper = None;
    for (i, r) in table.iter().enumerate() {
        let age = f64::from(r.age_months);
        if age <= age_months {
            lower = Some(i);
        }
        if age >= age_months {
            upper = Some(i);
            break;
        }
    }

    match (lower, upper) {
        (Some(l), Some(u)) if l == u => table[l].values,
        (None, _) => table[0].values,
        (_, None) => table[CHECKPOINTS - 1].values,
        (Some(l), Some(u)) => {
            let lo = &table[l];
            let hi = &table[u];
            let lo_age = f64::from(lo.age_months);
            let ratio = (age_months - lo_age) / (f64::from(hi.age_months) - lo_age);
            lo.values.lerp(&hi.values, ratio)
        }
    }
}

/// 여섯 개의 거친 백분위 구간.
///
/// 실제 백분위 순위가 아니라 표시용 대표값(3/15/37.5/62.5/85/97)을 갖는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PercentileBand {
    Below5,
    From5To25,
    From25To50,
    From50To75,
    From75To95,
    Above95,
}

impl PercentileBand {
    pub const ALL: [PercentileBand; 6] = [
        PercentileBand::Below5,
        PercentileBand::From5To25,
        PercentileBand::From25To50,
        PercentileBand::From50To75,
        PercentileBand::From75To95,
        PercentileBand::Above95,
    ];

    /// 구간 대표 점수.
    pub fn score(self) -> f64 {
        match self {
            PercentileBand::Below5 => 3.0,
            PercentileBand::From5To25 => 15.0,
            PercentileBand::From25To50 => 37.5,
            PercentileBand::From50To75 => 62.5,
            PercentileBand::From75To95 => 85.0,
            PercentileBand::Above95 => 97.0,
        }
    }

    /// 화면에 보이는 정수 백분위. .5는 올림한다(37.5 → 38, 62.5 → 63).
    pub fn rounded(self) -> u32 {
        self.score().round() as u32
    }

    /// `<5`, `5–25` 같은 구간 라벨.
    pub fn label(self) -> &'static str {
        match self {
            PercentileBand::Below5 => "<5",
            PercentileBand::From5To25 => "5–25",
            PercentileBand::From25To50 => "25–50",
            PercentileBand::From50To75 => "50–75",
            PercentileBand::From75To95 => "75–95",
            PercentileBand::Above95 => ">95",
        }
    }
}

/// 측정값을 기준값과 비교해 구간을 정한다. 경계값은 위 구간에 속한다.
pub fn band_for(refs: &PercentileValues, value: f64) -> PercentileBand {
    if value < refs.p5 {
        PercentileBand::Below5
    } else if value < refs.p25 {
        PercentileBand::From5To25
    } else if value < refs.p50 {
        PercentileBand::From25To50
    } else if value < refs.p75 {
        PercentileBand::From50To75
    } else if value < refs.p95 {
        PercentileBand::From75To95
    } else {
        PercentileBand::Above95
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::tables::{BOYS_HEIGHT, GIRLS_WEIGHT};

    #[test]
    fn midpoint_between_checkpoints_is_average() {
        // 12개월 75.7, 24개월 87.1
        let refs = reference_at(&BOYS_HEIGHT, 18.0);
        assert!((refs.p50 - 81.4).abs() < 1e-9, "p50={}", refs.p50);
    }

    #[test]
    fn clamps_outside_table() {
        assert_eq!(reference_at(&GIRLS_WEIGHT, -3.0), GIRLS_WEIGHT[0].values);
        assert_eq!(reference_at(&GIRLS_WEIGHT, 72.0), GIRLS_WEIGHT[8].values);
    }

    #[test]
    fn boundary_value_goes_to_upper_band() {
        let refs = BOYS_HEIGHT[4].values;
        assert_eq!(band_for(&refs, refs.p5), PercentileBand::From5To25);
        assert_eq!(band_for(&refs, refs.p95), PercentileBand::Above95);
    }

    #[test]
    fn rounded_scores() {
        let rounded: Vec<u32> = PercentileBand::ALL.iter().map(|b| b.rounded()).collect();
        assert_eq!(rounded, vec![3, 15, 38, 63, 85, 97]);
    }
}
