use serde::{Deserialize, Serialize};

use super::models::{CourseModel, HoleModel};

/// A hole as submitted at course creation time
#[derive(Debug, Deserialize)]
pub struct HoleSpec {
    pub number: u8,
    pub par: u8,
    pub handicap_rank: u8,
}

/// Request payload for creating a course together with its holes
#[derive(Debug, Deserialize)]
pub struct CourseCreateRequest {
    pub name: String,
    pub address: Option<String>,
    pub holes: Vec<HoleSpec>,
}

/// Response for course endpoints, holes sorted by hole number
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub holes: Vec<HoleResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HoleResponse {
    pub id: String,
    pub number: u8,
    pub par: u8,
    pub handicap_rank: u8,
}

impl CourseResponse {
    pub fn from_parts(course: CourseModel, mut holes: Vec<HoleModel>) -> Self {
        holes.sort_by_key(|h| h.number);
        Self {
            id: course.id,
            name: course.name,
            address: course.address,
            holes: holes
                .into_iter()
                .map(|h| HoleResponse {
                    id: h.id,
                    number: h.number,
                    par: h.par,
                    handicap_rank: h.handicap_rank,
                })
                .collect(),
        }
    }
}
