use crate::domain::model::Grade;

/// Lower bounds of each band, highest first. Anything below the last band is `F`.
const GRADE_THRESHOLDS: [(f64, Grade); 4] = [
    (90.0, Grade::A),
    (80.0, Grade::B),
    (70.0, Grade::C),
    (60.0, Grade::D),
];

pub fn grade_for(score: f64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}
