//! Ranger ranks and salary.

/// Experience needed for each rank, starting from rank 1.
const RANK_THRESHOLDS: [u32; 11] = [10, 30, 70, 150, 300, 600, 1200, 2000, 4000, 9000, 20000];

/// Highest achievable rank.
pub const MAX_RANK: u32 = RANK_THRESHOLDS.len() as u32 + 1;

/// Rank for the given amount of experience. Zero experience is rank 0.
pub fn rank(experience: u32) -> u32 {
    if experience == 0 {
        return 0;
    }
    RANK_THRESHOLDS
        .iter()
        .position(|&threshold| experience <= threshold)
        .map_or(MAX_RANK, |i| i as u32 + 1)
}

/// Daily salary in credits.
pub fn salary(experience: u32) -> u32 {
    rank(experience) * 3 + 4
}
