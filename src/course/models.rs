use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Database model for courses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModel {
    pub id: String, // UUID v4 as string
    pub name: String,
    pub address: Option<String>,
}

impl CourseModel {
    pub fn new(name: String, address: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            address,
        }
    }
}

/// Database model for holes. Hole numbers are unique within a course and
/// handicap ranks form a permutation of 1..N (rank 1 is the hardest hole).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleModel {
    pub id: String, // UUID v4 as string
    pub course_id: String,
    pub number: u8,
    pub par: u8,
    pub handicap_rank: u8,
}

impl HoleModel {
    pub fn new(course_id: String, number: u8, par: u8, handicap_rank: u8) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            course_id,
            number,
            par,
            handicap_rank,
        }
    }

    /// Front nine is holes 1-9; everything above is the back nine
    pub fn is_front_nine(&self) -> bool {
        self.number <= 9
    }
}
