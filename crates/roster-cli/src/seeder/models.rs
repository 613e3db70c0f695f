/// A house row waiting to be inserted.
#[derive(Debug, Clone)]
pub struct HouseSeed {
    pub house_name: String,
}

/// A student row waiting to be inserted.
#[derive(Debug, Clone)]
pub struct StudentSeed {
    pub name: String,
    pub class: i32,
    pub house_id: i32,
}

/// How much data `seed_all` generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    pub houses: usize,
    pub students_per_house: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            houses: 4,
            students_per_house: 25,
        }
    }
}
